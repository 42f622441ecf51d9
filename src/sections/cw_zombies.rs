use crate::process::decode::Columns;
use crate::process::fields::Timestamp;
use crate::schema::{Exportable, OutputFields};
use crate::sections::{Section, SectionInfo};

/// One Black Ops Cold War zombies game.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CwZombiesEvent {
    pub timestamp: Timestamp,
    pub device_type: String,
    pub deaths: i64,
    pub headshots: i64,
    pub kills: i64,
    pub operator: String,
    pub rank_at_start: i64,
    pub rank_at_end: i64,
    pub score: i64,
    pub suicides: i64,
    pub xp_at_start: i64,
    pub xp_at_end: i64,
    pub weapon: String,
    pub field_upgrade: String,
    pub round_number: i64,
    pub game_type: String,
    pub map: String,
}

impl Section for CwZombiesEvent {
    const INFO: SectionInfo = SectionInfo {
        name: "cw-zombies",
        title: "Call of Duty: Black Ops Cold War",
        subtitle: "Zombies Data (reverse chronological)",
        file_stem: "cold_war_zombies_events",
    };

    fn columns() -> Columns<Self> {
        Columns::<Self>::new()
            .timestamp("UTC Timestamp", |r, v| r.timestamp = v)
            .text("Device Type", |r, v| r.device_type = v)
            .int("Deaths", |r, v| r.deaths = v)
            .int("Headshots", |r, v| r.headshots = v)
            .int("Kills", |r, v| r.kills = v)
            .text("Operator", |r, v| r.operator = v)
            .int("Rank At Start", |r, v| r.rank_at_start = v)
            .int("Rank At End", |r, v| r.rank_at_end = v)
            .int("Score", |r, v| r.score = v)
            .int("Suicides", |r, v| r.suicides = v)
            .int("XP At Start", |r, v| r.xp_at_start = v)
            .int("XP At End", |r, v| r.xp_at_end = v)
            .text("Weapon", |r, v| r.weapon = v)
            .text("Field Upgrade", |r, v| r.field_upgrade = v)
            .int("Round Number", |r, v| r.round_number = v)
            .text("Game Type", |r, v| r.game_type = v)
            .text("Map", |r, v| r.map = v)
    }
}

impl Exportable for CwZombiesEvent {
    fn output_fields() -> OutputFields<Self> {
        OutputFields::<Self>::new()
            .timestamp("timestamp_utc", |r| r.timestamp)
            .label("device_type", |r| r.device_type.as_str())
            .int("deaths", |r| r.deaths)
            .int("headshots", |r| r.headshots)
            .int("kills", |r| r.kills)
            .label("operator", |r| r.operator.as_str())
            .int("rank_at_start", |r| r.rank_at_start)
            .int("rank_at_end", |r| r.rank_at_end)
            .int("score", |r| r.score)
            .int("suicides", |r| r.suicides)
            .int("xp_at_start", |r| r.xp_at_start)
            .int("xp_at_end", |r| r.xp_at_end)
            .label("weapon", |r| r.weapon.as_str())
            .label("field_upgrade", |r| r.field_upgrade.as_str())
            .int("round_number", |r| r.round_number)
            .label("game_type", |r| r.game_type.as_str())
            .label("map", |r| r.map.as_str())
    }
}
