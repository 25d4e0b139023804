//! Defines the `WeatherCode` enum, mapping WMO weather interpretation codes
//! (the `weather_code` variable) to descriptive variants.

use std::fmt;

/// A WMO weather interpretation code as reported in the `weather_code` variable.
///
/// Open-Meteo transmits the code as a float like every other series value.
/// Use [`WeatherCode::from_f32`] on decoded values or [`WeatherCode::from_i64`]
/// on integral codes.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum WeatherCode {
    /// Code 0: Clear sky.
    ClearSky = 0,
    /// Code 1: Mainly clear.
    MostlyClear = 1,
    /// Code 2: Partly cloudy.
    PartlyCloudy = 2,
    /// Code 3: Overcast.
    Overcast = 3,
    /// Code 45: Fog.
    Fog = 45,
    /// Code 48: Depositing rime fog.
    IcyFog = 48,
    /// Code 51: Light drizzle.
    LightDrizzle = 51,
    /// Code 53: Moderate drizzle.
    Drizzle = 53,
    /// Code 55: Dense drizzle.
    HeavyDrizzle = 55,
    /// Code 56: Light freezing drizzle.
    FreezingDrizzle = 56,
    /// Code 57: Dense freezing drizzle.
    HeavyFreezingDrizzle = 57,
    /// Code 61: Slight rain.
    LightRain = 61,
    /// Code 63: Moderate rain.
    Rain = 63,
    /// Code 65: Heavy rain.
    HeavyRain = 65,
    /// Code 66: Light freezing rain.
    FreezingRain = 66,
    /// Code 67: Heavy freezing rain.
    HeavyFreezingRain = 67,
    /// Code 71: Slight snow fall.
    LightSnow = 71,
    /// Code 73: Moderate snow fall.
    Snow = 73,
    /// Code 75: Heavy snow fall.
    HeavySnow = 75,
    /// Code 77: Snow grains.
    SnowGrains = 77,
    /// Code 80: Slight rain showers.
    LightShowers = 80,
    /// Code 81: Moderate rain showers.
    Showers = 81,
    /// Code 82: Violent rain showers.
    HeavyShowers = 82,
    /// Code 85: Slight snow showers.
    LightSnowShowers = 85,
    /// Code 86: Heavy snow showers.
    HeavySnowShowers = 86,
    /// Code 95: Thunderstorm, slight or moderate.
    Thunderstorm = 95,
    /// Code 96: Thunderstorm with slight hail.
    ThunderstormWithHail = 96,
    /// Code 99: Thunderstorm with heavy hail.
    HeavyThunderstorm = 99,
}

impl WeatherCode {
    /// Converts a WMO code into a `WeatherCode` variant.
    ///
    /// # Returns
    ///
    /// * `Some(WeatherCode)` if `value` is one of the codes Open-Meteo emits.
    /// * `None` for any other value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use openmeteo_frames::WeatherCode;
    ///
    /// assert_eq!(WeatherCode::from_i64(63), Some(WeatherCode::Rain));
    /// assert_eq!(WeatherCode::from_i64(4), None);
    ///
    /// match WeatherCode::from_i64(45) {
    ///     Some(WeatherCode::Fog) => println!("It's foggy!"),
    ///     Some(code) => println!("Weather is: {}", code),
    ///     None => println!("Unknown weather code."),
    /// }
    /// ```
    pub fn from_i64(value: i64) -> Option<Self> {
        match value {
            0 => Some(WeatherCode::ClearSky),
            1 => Some(WeatherCode::MostlyClear),
            2 => Some(WeatherCode::PartlyCloudy),
            3 => Some(WeatherCode::Overcast),
            45 => Some(WeatherCode::Fog),
            48 => Some(WeatherCode::IcyFog),
            51 => Some(WeatherCode::LightDrizzle),
            53 => Some(WeatherCode::Drizzle),
            55 => Some(WeatherCode::HeavyDrizzle),
            56 => Some(WeatherCode::FreezingDrizzle),
            57 => Some(WeatherCode::HeavyFreezingDrizzle),
            61 => Some(WeatherCode::LightRain),
            63 => Some(WeatherCode::Rain),
            65 => Some(WeatherCode::HeavyRain),
            66 => Some(WeatherCode::FreezingRain),
            67 => Some(WeatherCode::HeavyFreezingRain),
            71 => Some(WeatherCode::LightSnow),
            73 => Some(WeatherCode::Snow),
            75 => Some(WeatherCode::HeavySnow),
            77 => Some(WeatherCode::SnowGrains),
            80 => Some(WeatherCode::LightShowers),
            81 => Some(WeatherCode::Showers),
            82 => Some(WeatherCode::HeavyShowers),
            85 => Some(WeatherCode::LightSnowShowers),
            86 => Some(WeatherCode::HeavySnowShowers),
            95 => Some(WeatherCode::Thunderstorm),
            96 => Some(WeatherCode::ThunderstormWithHail),
            99 => Some(WeatherCode::HeavyThunderstorm),
            _ => None,
        }
    }

    /// Converts a decoded float value. Non-integral and non-finite values yield `None`.
    pub fn from_f32(value: f32) -> Option<Self> {
        if !value.is_finite() || value.fract() != 0.0 {
            return None;
        }
        Self::from_i64(value as i64)
    }

    pub fn code(&self) -> i64 {
        *self as i64
    }

    /// Short human readable label.
    pub fn description(&self) -> &'static str {
        match self {
            WeatherCode::ClearSky => "Clear Sky",
            WeatherCode::MostlyClear => "Mostly Clear",
            WeatherCode::PartlyCloudy => "Partly Cloudy",
            WeatherCode::Overcast => "Overcast",
            WeatherCode::Fog => "Foggy",
            WeatherCode::IcyFog => "Icy Fog",
            WeatherCode::LightDrizzle => "Light Drizzle",
            WeatherCode::Drizzle => "Drizzle",
            WeatherCode::HeavyDrizzle => "Heavy Drizzle",
            WeatherCode::FreezingDrizzle => "Freezing Drizzle",
            WeatherCode::HeavyFreezingDrizzle => "Heavy Freezing Drizzle",
            WeatherCode::LightRain => "Light Rain",
            WeatherCode::Rain => "Rain",
            WeatherCode::HeavyRain => "Heavy Rain",
            WeatherCode::FreezingRain => "Freezing Rain",
            WeatherCode::HeavyFreezingRain => "Heavy Freezing Rain",
            WeatherCode::LightSnow => "Light Snow",
            WeatherCode::Snow => "Snow",
            WeatherCode::HeavySnow => "Heavy Snow",
            WeatherCode::SnowGrains => "Snow Grains",
            WeatherCode::LightShowers => "Light Showers",
            WeatherCode::Showers => "Showers",
            WeatherCode::HeavyShowers => "Heavy Showers",
            WeatherCode::LightSnowShowers => "Light Snow Showers",
            WeatherCode::HeavySnowShowers => "Heavy Snow Showers",
            WeatherCode::Thunderstorm => "Thunderstorm",
            WeatherCode::ThunderstormWithHail => "Thunderstorm w/ Hail",
            WeatherCode::HeavyThunderstorm => "Heavy Thunderstorm",
        }
    }
}

impl fmt::Display for WeatherCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
