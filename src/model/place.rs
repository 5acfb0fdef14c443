use serde::{Deserialize, Deserializer, Serialize};

/// A device location fix. Captured once per screen activation and replaced
/// only by a fresh fetch.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// One entry of the Kakao category-search `documents` array.
///
/// Ordering and duplicates are preserved exactly as returned by the API.
/// The wire format carries `x`/`y` as JSON strings and uses empty strings
/// where this model uses `None`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Place {
    pub id: String,
    #[serde(rename = "place_name")]
    pub name: String,
    #[serde(rename = "address_name")]
    pub address: String,
    #[serde(rename = "road_address_name", default, deserialize_with = "empty_as_none")]
    pub road_address: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub phone: Option<String>,
    /// Longitude.
    #[serde(deserialize_with = "lenient_f64")]
    pub x: f64,
    /// Latitude.
    #[serde(deserialize_with = "lenient_f64")]
    pub y: f64,
}

impl Place {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            latitude: self.y,
            longitude: self.x,
        }
    }

    /// Road address when present, lot-number address otherwise.
    pub fn display_address(&self) -> &str {
        self.road_address.as_deref().unwrap_or(&self.address)
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|it| !it.is_empty()))
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(value) => Ok(value),
        Raw::Text(text) => text.parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_kakao_documents_in_order() {
        let body = r#"[
            {
                "id": "8157975",
                "place_name": "삼성서울병원",
                "address_name": "서울 강남구 일원동 50",
                "road_address_name": "서울 강남구 일원로 81",
                "phone": "02-3410-2114",
                "x": "127.08559",
                "y": "37.48813"
            },
            {
                "id": "21160804",
                "place_name": "연세곰돌이소아청소년과의원",
                "address_name": "서울 강남구 대치동 902",
                "road_address_name": "",
                "phone": "",
                "x": "127.062583",
                "y": "37.499587"
            }
        ]"#;

        let places: Vec<Place> = serde_json::from_str(body).unwrap();
        assert_eq!(places.len(), 2);
        assert_eq!(places[0].id, "8157975");
        assert_eq!(places[0].name, "삼성서울병원");
        assert_eq!(places[0].road_address.as_deref(), Some("서울 강남구 일원로 81"));
        assert_eq!(places[0].phone.as_deref(), Some("02-3410-2114"));
        assert_eq!(places[0].x, 127.08559);
        assert_eq!(places[0].y, 37.48813);
        assert_eq!(places[1].id, "21160804");
        assert_eq!(places[1].road_address, None);
        assert_eq!(places[1].phone, None);
    }

    #[test]
    fn accepts_numeric_coordinates() {
        let place: Place = serde_json::from_str(
            r#"{"id": "1", "place_name": "a", "address_name": "b", "x": 127.0, "y": 37.5}"#,
        )
        .unwrap();
        assert_eq!(place.coordinate(), Coordinate { latitude: 37.5, longitude: 127.0 });
    }

    #[test]
    fn display_address_falls_back_to_lot_number() {
        let place: Place = serde_json::from_str(
            r#"{"id": "1", "place_name": "a", "address_name": "lot", "road_address_name": "", "x": "1", "y": "2"}"#,
        )
        .unwrap();
        assert_eq!(place.display_address(), "lot");
    }
}
