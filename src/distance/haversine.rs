//! Haversine great-circle distance.
//!
//! # Reference
//!
//! Sinnott, R.W. (1984). "Virtues of the Haversine", *Sky and Telescope*
//! 68(2), 159.

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometres between two coordinates given in
/// degrees.
///
/// The intermediate haversine term is clamped to `[0, 1]`, so rounding
/// near identical or antipodal points never produces `NaN`.
///
/// # Examples
///
/// ```
/// use u_dispatch::distance::haversine_km;
///
/// // Berlin -> Paris is roughly 878 km.
/// let d = haversine_km(52.5200, 13.4050, 48.8566, 2.3522);
/// assert!((d - 878.0).abs() < 5.0);
/// assert_eq!(haversine_km(10.0, 20.0, 10.0, 20.0), 0.0);
/// ```
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let delta_phi = (lat2 - lat1).to_radians();
    let delta_lambda = (lon2 - lon1).to_radians();

    let sin_phi = (delta_phi / 2.0).sin();
    let sin_lambda = (delta_lambda / 2.0).sin();
    let a = (sin_phi * sin_phi + phi1.cos() * phi2.cos() * sin_lambda * sin_lambda)
        .clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}
