use std::fmt;

pub const DEGREE_SYMBOL: &str = "\u{00B0}C";

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Fahrenheit(pub f64);

/// A temperature in degrees Celsius, always held rounded to one decimal place.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Celsius(f64);

impl Celsius {
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<Fahrenheit> for Celsius {
    fn from(value: Fahrenheit) -> Self {
        Celsius(round_to_tenth((value.0 - 32.0) * 5.0 / 9.0))
    }
}

impl fmt::Display for Celsius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// Converts Fahrenheit to Celsius, rounded to one decimal place.
pub fn fahrenheit_to_celsius(temp: f64) -> f64 {
    Celsius::from(Fahrenheit(temp)).value()
}

/// Appends the degree Celsius symbol: `format_temperature(Celsius) == "16.7°C"`.
pub fn format_temperature(temp: impl fmt::Display) -> String {
    format!("{temp}{DEGREE_SYMBOL}")
}

// Float formatting is correctly rounded with ties to even on the exact
// binary value, so going through it gives a true round-half-even.
fn round_to_tenth(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}
