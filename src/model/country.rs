use super::trip::Trip;

/// One row of the country list: a country and how many trips went there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountrySummary {
    pub country: String,
    pub emoji: String,
    pub trips: usize,
}

/// Groups trips by country, in the order each country was first visited.
pub fn summarize_countries(trips: &[Trip]) -> Vec<CountrySummary> {
    let mut summaries: Vec<CountrySummary> = Vec::new();
    for trip in trips {
        match summaries.iter_mut().find(|s| s.country == trip.country) {
            Some(summary) => summary.trips += 1,
            None => summaries.push(CountrySummary {
                country: trip.country.clone(),
                emoji: trip.emoji.clone(),
                trips: 1,
            }),
        }
    }
    summaries
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use quickcheck_macros::quickcheck;

    use super::*;
    use crate::model::Position;

    fn make_trip(city: &str, country: &str) -> Trip {
        Trip::new(
            city.to_string(),
            country.to_string(),
            String::new(),
            NaiveDate::from_ymd_opt(2026, 2, 16).unwrap(),
            String::new(),
            Position::default(),
        )
        .unwrap()
    }

    #[test]
    fn empty_trips_no_countries() {
        assert!(summarize_countries(&[]).is_empty());
    }

    #[test]
    fn counts_trips_per_country_in_first_seen_order() {
        let trips = vec![
            make_trip("Lisbon", "Portugal"),
            make_trip("Madrid", "Spain"),
            make_trip("Porto", "Portugal"),
        ];
        let summaries = summarize_countries(&trips);
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].country, "Portugal");
        assert_eq!(summaries[0].trips, 2);
        assert_eq!(summaries[1].country, "Spain");
        assert_eq!(summaries[1].trips, 1);
    }

    #[quickcheck]
    fn total_trips_preserved(countries: Vec<u8>) -> bool {
        let trips: Vec<Trip> = countries
            .iter()
            .map(|c| make_trip("City", &format!("Country {}", c % 5)))
            .collect();
        summarize_countries(&trips).iter().map(|s| s.trips).sum::<usize>() == trips.len()
    }
}
