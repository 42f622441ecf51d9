//! The sections of a data-request document that can be exported.
//!
//! Each section is a record type that declares where its table lives, how
//! the table's columns decode into the record, and how the record is written
//! out again.

use clap::ValueEnum;
use scraper::Html;

use crate::error::ExtractError;
use crate::process::{self, decode::Columns, Dataset};
use crate::schema::Exportable;

pub mod bo6_campaign;
pub mod bo6_multiplayer;
pub mod cw_zombies;
pub mod mw_campaign;
pub mod mw_coop;
pub mod mw_multiplayer;
pub mod warzone2;

pub use bo6_campaign::Bo6Checkpoint;
pub use bo6_multiplayer::Bo6MultiplayerMatch;
pub use cw_zombies::CwZombiesEvent;
pub use mw_campaign::MwCampaignSegment;
pub use mw_coop::MwCoopMatch;
pub use mw_multiplayer::MwMultiplayerMatch;
pub use warzone2::Warzone2Match;

/// Where a section's table lives and what its output files are called.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionInfo {
    /// Short name used on the command line and in logs.
    pub name: &'static str,
    /// Text of the `h1` heading.
    pub title: &'static str,
    /// Text of the `h2` heading under `title`.
    pub subtitle: &'static str,
    /// Output file name without extension.
    pub file_stem: &'static str,
}

pub trait Section: Default + Exportable {
    const INFO: SectionInfo;

    /// Input schema, keyed by the exact header text.
    fn columns() -> Columns<Self>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum SectionKind {
    #[value(name = "bo6-campaign")]
    Bo6Campaign,
    #[value(name = "bo6-multiplayer")]
    Bo6Multiplayer,
    #[value(name = "cw-zombies")]
    CwZombies,
    #[value(name = "mw-campaign")]
    MwCampaign,
    #[value(name = "mw-coop")]
    MwCoop,
    #[value(name = "mw-multiplayer")]
    MwMultiplayer,
    #[value(name = "warzone2")]
    Warzone2,
}

impl SectionKind {
    /// Every section, in export order.
    pub const ALL: [SectionKind; 7] = [
        SectionKind::Bo6Campaign,
        SectionKind::Bo6Multiplayer,
        SectionKind::CwZombies,
        SectionKind::MwCampaign,
        SectionKind::MwCoop,
        SectionKind::MwMultiplayer,
        SectionKind::Warzone2,
    ];

    pub fn info(self) -> SectionInfo {
        match self {
            SectionKind::Bo6Campaign => Bo6Checkpoint::INFO,
            SectionKind::Bo6Multiplayer => Bo6MultiplayerMatch::INFO,
            SectionKind::CwZombies => CwZombiesEvent::INFO,
            SectionKind::MwCampaign => MwCampaignSegment::INFO,
            SectionKind::MwCoop => MwCoopMatch::INFO,
            SectionKind::MwMultiplayer => MwMultiplayerMatch::INFO,
            SectionKind::Warzone2 => Warzone2Match::INFO,
        }
    }

    /// Locates and decodes this section's table.
    pub fn extract(self, document: &Html) -> Result<Box<dyn Dataset>, ExtractError> {
        let dataset: Box<dyn Dataset> = match self {
            SectionKind::Bo6Campaign => Box::new(process::extract::<Bo6Checkpoint>(document)?),
            SectionKind::Bo6Multiplayer => {
                Box::new(process::extract::<Bo6MultiplayerMatch>(document)?)
            }
            SectionKind::CwZombies => Box::new(process::extract::<CwZombiesEvent>(document)?),
            SectionKind::MwCampaign => Box::new(process::extract::<MwCampaignSegment>(document)?),
            SectionKind::MwCoop => Box::new(process::extract::<MwCoopMatch>(document)?),
            SectionKind::MwMultiplayer => {
                Box::new(process::extract::<MwMultiplayerMatch>(document)?)
            }
            SectionKind::Warzone2 => Box::new(process::extract::<Warzone2Match>(document)?),
        };
        Ok(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn names<R: Section>() -> (Vec<&'static str>, Vec<&'static str>) {
        (
            R::columns().names().collect(),
            R::output_fields().names(),
        )
    }

    /// Input header names and output field names of `kind`.
    fn schema_names(kind: SectionKind) -> (Vec<&'static str>, Vec<&'static str>) {
        match kind {
            SectionKind::Bo6Campaign => names::<Bo6Checkpoint>(),
            SectionKind::Bo6Multiplayer => names::<Bo6MultiplayerMatch>(),
            SectionKind::CwZombies => names::<CwZombiesEvent>(),
            SectionKind::MwCampaign => names::<MwCampaignSegment>(),
            SectionKind::MwCoop => names::<MwCoopMatch>(),
            SectionKind::MwMultiplayer => names::<MwMultiplayerMatch>(),
            SectionKind::Warzone2 => names::<Warzone2Match>(),
        }
    }

    #[test]
    fn input_and_output_schemas_line_up() {
        for kind in SectionKind::ALL {
            let (inputs, outputs) = schema_names(kind);
            assert_eq!(inputs.len(), outputs.len(), "{:?}", kind);

            let unique_in: HashSet<_> = inputs.iter().collect();
            let unique_out: HashSet<_> = outputs.iter().collect();
            assert_eq!(unique_in.len(), inputs.len(), "{:?} inputs", kind);
            assert_eq!(unique_out.len(), outputs.len(), "{:?} outputs", kind);
        }
    }

    #[test]
    fn output_names_are_snake_case() {
        for kind in SectionKind::ALL {
            for name in schema_names(kind).1 {
                assert!(
                    name.chars()
                        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'),
                    "{}",
                    name
                );
            }
        }
    }

    #[test]
    fn names_and_stems_are_distinct() {
        let names: HashSet<_> = SectionKind::ALL.iter().map(|k| k.info().name).collect();
        let stems: HashSet<_> = SectionKind::ALL
            .iter()
            .map(|k| k.info().file_stem)
            .collect();
        assert_eq!(names.len(), SectionKind::ALL.len());
        assert_eq!(stems.len(), SectionKind::ALL.len());
    }

    #[test]
    fn coop_keeps_its_established_file_name() {
        assert_eq!(SectionKind::MwCoop.info().file_stem, "modern_warfare_coop");
    }

    #[test]
    fn cli_names_match_section_names() {
        for kind in SectionKind::ALL {
            let value = kind.to_possible_value().unwrap();
            assert_eq!(value.get_name(), kind.info().name);
        }
    }
}
