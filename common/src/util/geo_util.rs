use crate::models::Coordinates;

/// 地球平均半径（公里）
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// haversine 球面距离，四舍五入到公里
///
/// 任一端缺失，或任一经纬度为 0，都返回 `None`（0 被当作未知位置）。
pub fn distance_km(from: Option<Coordinates>, to: Option<Coordinates>) -> Option<u32> {
    let (a, b) = (from?, to?);
    if [a.lat, a.lon, b.lat, b.lon].iter().any(|v| *v == 0.0 || v.is_nan()) {
        return None;
    }
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    Some((EARTH_RADIUS_KM * c).round() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BERLIN: Coordinates = Coordinates { lat: 52.5200, lon: 13.4050 };
    const PARIS: Coordinates = Coordinates { lat: 48.8566, lon: 2.3522 };

    #[test]
    fn berlin_to_paris() {
        let d = distance_km(Some(BERLIN), Some(PARIS)).unwrap();
        assert!((873..=883).contains(&d), "got {d}");
    }

    #[test]
    fn distance_is_symmetric() {
        assert_eq!(distance_km(Some(BERLIN), Some(PARIS)), distance_km(Some(PARIS), Some(BERLIN)));
    }

    #[test]
    fn same_point_is_zero_km() {
        assert_eq!(distance_km(Some(PARIS), Some(PARIS)), Some(0));
    }

    #[test]
    fn absent_side_is_unknown() {
        assert_eq!(distance_km(None, Some(PARIS)), None);
        assert_eq!(distance_km(Some(BERLIN), None), None);
        assert_eq!(distance_km(None, None), None);
    }

    #[test]
    fn zero_component_is_unknown() {
        let equator = Coordinates::new(0.0, 13.4);
        let greenwich = Coordinates::new(51.48, 0.0);
        assert_eq!(distance_km(Some(equator), Some(PARIS)), None);
        assert_eq!(distance_km(Some(BERLIN), Some(greenwich)), None);
        assert_eq!(distance_km(Some(Coordinates::new(-0.0, 1.0)), Some(PARIS)), None);
    }
}
