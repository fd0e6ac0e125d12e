use std::fmt;
use std::str::FromStr;

use crate::constants::AstronomicalUnit;
use crate::sysview_errors::SysViewError;

/// Bodies fetched from JPL Horizons, in the order they are requested and displayed.
///
/// Each variant maps to a Horizons `COMMAND` identifier, a file stem used when the
/// response is stored on disk, and a mean heliocentric distance.
///
/// The `Earth` slot queries COMMAND `10` (the Sun) from the geocenter: its record holds
/// the apparent position of the Sun and serves as the reference for
/// [`visible_at_midnight`](crate::visibility::visible_at_midnight).
///
/// Conversions
/// -----------
/// * [`FromStr`] accepts the file stem or the display name, case-insensitive.
/// * [`Planet::horizons_command`] gives the raw Horizons identifier.
///
/// Examples
/// --------
/// ```rust
/// use sysview::horizons::bodies::Planet;
///
/// let mars: Planet = "Mars".parse().unwrap();
/// assert_eq!(mars.horizons_command(), "499");
/// assert_eq!(mars.file_stem(), "mars");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Planet {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl Planet {
    pub const ALL: [Planet; 8] = [
        Planet::Mercury,
        Planet::Venus,
        Planet::Earth,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Uranus,
        Planet::Neptune,
    ];

    /// Horizons `COMMAND` value for this body.
    pub fn horizons_command(&self) -> &'static str {
        match self {
            Planet::Mercury => "199",
            Planet::Venus => "299",
            Planet::Earth => "10",
            Planet::Mars => "499",
            Planet::Jupiter => "599",
            Planet::Saturn => "699",
            Planet::Uranus => "799",
            Planet::Neptune => "899",
        }
    }

    /// Stem of the file the Horizons response is written to.
    pub fn file_stem(&self) -> &'static str {
        match self {
            Planet::Mercury => "mercury",
            Planet::Venus => "venus",
            Planet::Earth => "earth",
            Planet::Mars => "mars",
            Planet::Jupiter => "jupiter",
            Planet::Saturn => "saturn",
            Planet::Uranus => "uranus",
            Planet::Neptune => "neptune",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Planet::Mercury => "Mercury",
            Planet::Venus => "Venus",
            Planet::Earth => "Earth",
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jupiter",
            Planet::Saturn => "Saturn",
            Planet::Uranus => "Uranus",
            Planet::Neptune => "Neptune",
        }
    }

    /// Mean distance to the Sun (semi-major axis, rounded), in AU.
    pub fn mean_distance(&self) -> AstronomicalUnit {
        match self {
            Planet::Mercury => 0.39,
            Planet::Venus => 0.72,
            Planet::Earth => 1.0,
            Planet::Mars => 1.52,
            Planet::Jupiter => 5.20,
            Planet::Saturn => 9.58,
            Planet::Uranus => 19.20,
            Planet::Neptune => 30.05,
        }
    }

    /// True for the slot holding the apparent position of the Sun.
    pub fn is_sun_reference(&self) -> bool {
        matches!(self, Planet::Earth)
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Planet {
    type Err = SysViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Planet::ALL
            .into_iter()
            .find(|p| p.file_stem() == key)
            .ok_or_else(|| SysViewError::InvalidPlanet(s.to_string()))
    }
}

#[cfg(test)]
mod bodies_test {
    use super::*;

    #[test]
    fn test_parse_planet() {
        assert_eq!("jupiter".parse::<Planet>().unwrap(), Planet::Jupiter);
        assert_eq!(" NEPTUNE ".parse::<Planet>().unwrap(), Planet::Neptune);
        assert_eq!(
            "pluto".parse::<Planet>(),
            Err(SysViewError::InvalidPlanet("pluto".into()))
        );
    }

    #[test]
    fn test_commands_are_distinct() {
        let mut commands: Vec<_> = Planet::ALL.iter().map(|p| p.horizons_command()).collect();
        commands.sort();
        commands.dedup();
        assert_eq!(commands.len(), Planet::ALL.len());
    }

    #[test]
    fn test_sun_reference() {
        let refs: Vec<_> = Planet::ALL
            .into_iter()
            .filter(|p| p.is_sun_reference())
            .collect();
        assert_eq!(refs, vec![Planet::Earth]);
        assert_eq!(Planet::Earth.horizons_command(), "10");
    }
}
