use regex::Regex;
use serde::{de::Visitor, Deserialize, Deserializer, Serialize};
use std::{
    fmt::{self, Display},
    str::FromStr,
};

#[derive(Debug, Clone, PartialEq)]
/// a numeric interval written in bracket notation, such as "[0:25)".
/// a square bracket includes the adjacent endpoint, a parenthesis
/// excludes it.
pub struct Bracket {
    min: f64,
    max: f64,
    lower_inclusive: bool,
    upper_inclusive: bool,
}

impl Bracket {
    const BRACKET_REGEX: &str = r"^\s*([\[(])\s*(-?[0-9.]+)\s*:\s*(-?[0-9.]+)\s*([\])])\s*$";

    /// true if the value falls within this interval, honoring the
    /// inclusivity of each endpoint.
    pub fn contains(&self, value: f64) -> bool {
        let above_min = if self.lower_inclusive {
            self.min <= value
        } else {
            self.min < value
        };
        let below_max = if self.upper_inclusive {
            value <= self.max
        } else {
            value < self.max
        };
        above_min && below_max
    }
}

impl Display for Bracket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let lower = if self.lower_inclusive { '[' } else { '(' };
        let upper = if self.upper_inclusive { ']' } else { ')' };
        write!(f, "{}{}:{}{}", lower, self.min, self.max, upper)
    }
}

impl FromStr for Bracket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // regex here should be built at compile time
        let re = Regex::new(Self::BRACKET_REGEX)
            .map_err(|e| format!("internal error building bracket regex: {}", e))?;
        match re.captures(s) {
            None => Err(format!("unable to parse bracket notation: '{}'", s)),
            Some(groups) => {
                let lower_inclusive = &groups[1] == "[";
                let min = groups[2]
                    .parse::<f64>()
                    .map_err(|e| format!("bracket '{}' has non-numeric minimum: {}", s, e))?;
                let max = groups[3]
                    .parse::<f64>()
                    .map_err(|e| format!("bracket '{}' has non-numeric maximum: {}", s, e))?;
                let upper_inclusive = &groups[4] == "]";
                let result = Bracket {
                    min,
                    max,
                    lower_inclusive,
                    upper_inclusive,
                };
                Ok(result)
            }
        }
    }
}

struct BracketVisitor;

impl Visitor<'_> for BracketVisitor {
    type Value = Bracket;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(
            "an interval in bracket notation such as \"[0:25)\", where '[' and ']' include the endpoint and '(' and ')' exclude it",
        )
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Bracket::from_str(v).map_err(serde::de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Bracket {
    fn deserialize<D>(deserializer: D) -> Result<Bracket, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(BracketVisitor)
    }
}

impl Serialize for Bracket {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
