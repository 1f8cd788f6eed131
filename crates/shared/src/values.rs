//! Small value types that content attributes parse into

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Inclusive numeric range written as `"min,max"` or a single value
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ValueRange {
    pub start: f32,
    pub end: f32,
}

impl ValueRange {
    pub fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    /// Range with `start <= end`
    pub fn normalized(self) -> Self {
        if self.start > self.end {
            Self::new(self.end, self.start)
        } else {
            self
        }
    }

    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.start && value <= self.end
    }
}

impl fmt::Display for ValueRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl FromStr for ValueRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = split_numbers(s)?;
        match parts.as_slice() {
            [single] => Ok(Self::new(*single, *single)),
            [start, end] => Ok(Self::new(*start, *end)),
            _ => Err(format!("expected 1 or 2 numbers, found {}", parts.len())),
        }
    }
}

/// RGBA color with components in 0..=1
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    fn from_hex(hex: &str) -> Result<Self, String> {
        let byte = |i: usize| {
            hex.get(i..i + 2)
                .and_then(|b| u8::from_str_radix(b, 16).ok())
                .map(|b| b as f32 / 255.0)
                .ok_or_else(|| format!("invalid hex color '#{}'", hex))
        };
        match hex.len() {
            6 => Ok(Self::rgba(byte(0)?, byte(2)?, byte(4)?, 1.0)),
            8 => Ok(Self::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => Err(format!("invalid hex color '#{}'", hex)),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl FromStr for Color {
    type Err = String;

    /// Accepts `"r,g,b[,a]"` (0..1, or 0..255 when any component exceeds 1)
    /// and `"#RRGGBB[AA]"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return Self::from_hex(hex);
        }

        let mut parts = split_numbers(s)?;
        if parts.len() != 3 && parts.len() != 4 {
            return Err(format!("expected 3 or 4 components, found {}", parts.len()));
        }
        if parts.iter().any(|c| *c > 1.0) {
            parts.iter_mut().for_each(|c| *c /= 255.0);
        }
        let alpha = parts.get(3).copied().unwrap_or(1.0);
        Ok(Self::rgba(parts[0], parts[1], parts[2], alpha))
    }
}

fn split_numbers(s: &str) -> Result<Vec<f32>, String> {
    s.split(',')
        .map(|part| {
            let part = part.trim();
            match part.parse::<f32>() {
                Ok(value) if value.is_finite() => Ok(value),
                Ok(_) => Err(format!("'{}' is not a finite number", part)),
                Err(_) => Err(format!("'{}' is not a number", part)),
            }
        })
        .collect()
}
