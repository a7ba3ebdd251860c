//! Unit tests for the Ergast envelope

use super::*;
use serde_json::json;

#[cfg(test)]
mod envelope_tests {
    use super::*;

    #[test]
    fn test_seasons_envelope() {
        let body = json!({
            "MRData": {
                "xmlns": "http://ergast.com/mrd/1.5",
                "series": "f1",
                "url": "http://ergast.com/api/f1/seasons.json",
                "limit": "2",
                "offset": "0",
                "total": "75",
                "SeasonTable": {
                    "Seasons": [
                        { "season": "1950", "url": "https://en.wikipedia.org/wiki/1950_Formula_One_season" },
                        { "season": "1951", "url": "https://en.wikipedia.org/wiki/1951_Formula_One_season" }
                    ]
                }
            }
        });

        let envelope: SeasonsEnvelope = serde_json::from_value(body).unwrap();
        assert_eq!(envelope.mr_data.limit, 2);
        assert_eq!(envelope.mr_data.offset, 0);

        let page = envelope.into_page();
        assert_eq!(page.total, 75);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].season, "1950");
    }

    #[test]
    fn test_numeric_paging_fields_are_accepted() {
        let body = json!({
            "MRData": {
                "limit": 30,
                "offset": 0,
                "total": 0,
                "SeasonTable": { "Seasons": [] }
            }
        });

        let page = serde_json::from_value::<SeasonsEnvelope>(body)
            .unwrap()
            .into_page();
        assert!(page.is_empty());
        assert_eq!(page.total, 0);
    }

    #[test]
    fn test_invalid_total_is_an_error() {
        let body = json!({
            "MRData": {
                "limit": "30",
                "offset": "0",
                "total": "lots",
                "SeasonTable": { "Seasons": [] }
            }
        });

        assert!(serde_json::from_value::<SeasonsEnvelope>(body).is_err());
    }

    #[test]
    fn test_races_envelope() {
        let body = json!({
            "MRData": {
                "limit": "30",
                "offset": "0",
                "total": "1",
                "RaceTable": {
                    "season": "2023",
                    "Races": [{
                        "season": "2023",
                        "round": "1",
                        "url": "https://en.wikipedia.org/wiki/2023_Bahrain_Grand_Prix",
                        "raceName": "Bahrain Grand Prix",
                        "Circuit": {
                            "circuitId": "bahrain",
                            "circuitName": "Bahrain International Circuit",
                            "Location": {
                                "lat": "26.0325",
                                "long": "50.5106",
                                "locality": "Sakhir",
                                "country": "Bahrain"
                            }
                        },
                        "date": "2023-03-05"
                    }]
                }
            }
        });

        let page = serde_json::from_value::<RacesEnvelope>(body)
            .unwrap()
            .into_page();
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].race_name, "Bahrain Grand Prix");
    }

    #[test]
    fn test_races_envelope_missing_races_key() {
        let body = json!({
            "MRData": {
                "limit": "30",
                "offset": "0",
                "total": "0",
                "RaceTable": { "season": "1900" }
            }
        });

        let page = serde_json::from_value::<RacesEnvelope>(body)
            .unwrap()
            .into_page();
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_results_envelope_takes_first_race() {
        let body = json!({
            "MRData": {
                "limit": "30",
                "offset": "0",
                "total": "2",
                "RaceTable": {
                    "season": "2023",
                    "round": "1",
                    "Races": [{
                        "round": "1",
                        "raceName": "Bahrain Grand Prix",
                        "Results": [
                            {
                                "position": "1",
                                "Driver": { "givenName": "Max", "familyName": "Verstappen", "nationality": "Dutch" },
                                "Constructor": { "name": "Red Bull" },
                                "Time": { "millis": "5636736", "time": "1:33:56.736" }
                            },
                            {
                                "position": "2",
                                "Driver": { "givenName": "Sergio", "familyName": "Pérez", "nationality": "Mexican" },
                                "Constructor": { "name": "Red Bull" }
                            }
                        ]
                    }]
                }
            }
        });

        let page = serde_json::from_value::<ResultsEnvelope>(body)
            .unwrap()
            .into_page();
        assert_eq!(page.total, 2);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].driver.family_name, "Verstappen");
        assert!(page.items[1].time.is_none());
    }

    #[test]
    fn test_results_envelope_without_races() {
        let body = json!({
            "MRData": {
                "limit": "30",
                "offset": "0",
                "total": "0",
                "RaceTable": { "season": "2099", "round": "1", "Races": [] }
            }
        });

        let page = serde_json::from_value::<ResultsEnvelope>(body)
            .unwrap()
            .into_page();
        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
    }
}
