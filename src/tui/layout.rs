//! Application layout: sidebar, map, and user panel.

use ratatui::layout::{Constraint, Layout, Rect};

/// Share of the width given to the sidebar.
const SIDEBAR_PERCENT: u16 = 40;
/// Size of the user panel overlay.
const USER_PANEL_WIDTH: u16 = 28;
const USER_PANEL_HEIGHT: u16 = 4;

/// The three regions of the main screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutAreas {
    /// Left column: routed screens (lists, detail, trip form).
    pub sidebar: Rect,
    /// Right column: the world map.
    pub map: Rect,
    /// Overlay in the top-right corner of the map, inside its border.
    pub user: Rect,
}

/// Splits `area` into sidebar, map, and user panel.
pub fn app_layout(area: Rect) -> LayoutAreas {
    let [sidebar, map] = Layout::horizontal([
        Constraint::Percentage(SIDEBAR_PERCENT),
        Constraint::Min(0),
    ])
    .areas(area);

    let inner_width = map.width.saturating_sub(2);
    let inner_height = map.height.saturating_sub(2);
    // No room inside the border: collapse to an empty rect at the map origin.
    let user = if inner_width == 0 || inner_height == 0 {
        Rect::new(map.x, map.y, 0, 0)
    } else {
        let width = USER_PANEL_WIDTH.min(inner_width);
        Rect {
            x: map.x + 1 + inner_width - width,
            y: map.y + 1,
            width,
            height: USER_PANEL_HEIGHT.min(inner_height),
        }
    };

    LayoutAreas { sidebar, map, user }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contains(outer: Rect, inner: Rect) -> bool {
        inner.x >= outer.x
            && inner.y >= outer.y
            && inner.right() <= outer.right()
            && inner.bottom() <= outer.bottom()
    }

    #[test]
    fn sidebar_left_map_right() {
        let areas = app_layout(Rect::new(0, 0, 100, 30));
        assert_eq!(areas.sidebar, Rect::new(0, 0, 40, 30));
        assert_eq!(areas.map, Rect::new(40, 0, 60, 30));
    }

    #[test]
    fn user_panel_in_top_right_of_map() {
        let areas = app_layout(Rect::new(0, 0, 100, 30));
        assert_eq!(areas.user, Rect::new(71, 1, 28, 4));
        assert!(contains(areas.map, areas.user));
    }

    #[test]
    fn regions_fit_in_offset_area() {
        let area = Rect::new(5, 3, 80, 24);
        let areas = app_layout(area);
        assert!(contains(area, areas.sidebar));
        assert!(contains(area, areas.map));
        assert!(contains(areas.map, areas.user));
    }

    #[test]
    fn narrow_map_keeps_user_panel_at_map_origin() {
        for width in 0..6 {
            let area = Rect::new(3, 2, width, 10);
            let areas = app_layout(area);
            if areas.map.width < 3 {
                assert_eq!(areas.user, Rect::new(areas.map.x, areas.map.y, 0, 0));
            }
            assert!(areas.user.x >= areas.map.x, "width {width}");
            assert!(contains(areas.map, areas.user), "width {width}");
        }
    }

    #[test]
    fn flat_map_has_empty_user_panel() {
        let areas = app_layout(Rect::new(0, 0, 100, 2));
        assert_eq!(areas.user, Rect::new(areas.map.x, areas.map.y, 0, 0));
    }

    #[test]
    fn tiny_area_does_not_overflow() {
        let area = Rect::new(0, 0, 4, 1);
        let areas = app_layout(area);
        assert!(contains(area, areas.map));
        assert!(contains(areas.map, areas.user));
    }
}
