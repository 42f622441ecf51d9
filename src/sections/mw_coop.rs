use crate::process::decode::Columns;
use crate::process::fields::Timestamp;
use crate::schema::{Exportable, OutputFields};
use crate::sections::{Section, SectionInfo};

/// One Modern Warfare Spec Ops (co-op) mission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MwCoopMatch {
    pub timestamp: Timestamp,
    pub platform: String,
    pub level: String,
    pub game_type: String,
    pub active_objective: String,
    pub role_field_upgrade_used: String,
    pub munition_used: String,
    pub rank: i64,
    pub total_xp: i64,
    pub total_kills: i64,
    pub total_revives: i64,
    pub total_last_stands: i64,
    pub average_speed: f64,
}

impl Section for MwCoopMatch {
    const INFO: SectionInfo = SectionInfo {
        name: "mw-coop",
        title: "Call of Duty: Modern Warfare",
        subtitle: "CoOp Match Data (reverse chronological)",
        file_stem: "modern_warfare_coop",
    };

    fn columns() -> Columns<Self> {
        Columns::<Self>::new()
            .timestamp("UTC Timestamp", |r, v| r.timestamp = v)
            .text("Platform", |r, v| r.platform = v)
            .text("CoOp Level Screen Name", |r, v| r.level = v)
            .text("Gametype Screen Name", |r, v| r.game_type = v)
            .text("Active Objective", |r, v| r.active_objective = v)
            .text("Role Field Upgrade Used", |r, v| r.role_field_upgrade_used = v)
            .text("Munition Used", |r, v| r.munition_used = v)
            .int("Rank", |r, v| r.rank = v)
            .int("Total XP", |r, v| r.total_xp = v)
            .int("Total Kills", |r, v| r.total_kills = v)
            .int("Total Revives", |r, v| r.total_revives = v)
            .int("Total Last Stands", |r, v| r.total_last_stands = v)
            .float("Average Speed During Match", |r, v| r.average_speed = v)
    }
}

impl Exportable for MwCoopMatch {
    fn output_fields() -> OutputFields<Self> {
        OutputFields::<Self>::new()
            .timestamp("timestamp_utc", |r| r.timestamp)
            .label("platform", |r| r.platform.as_str())
            .label("coop_level_screen_name", |r| r.level.as_str())
            .label("gametype_screen_name", |r| r.game_type.as_str())
            .label("active_objective", |r| r.active_objective.as_str())
            .label("role_field_upgrade_used", |r| r.role_field_upgrade_used.as_str())
            .label("munition_used", |r| r.munition_used.as_str())
            .int("rank", |r| r.rank)
            .int("total_xp", |r| r.total_xp)
            .int("total_kills", |r| r.total_kills)
            .int("total_revives", |r| r.total_revives)
            .int("total_last_stands", |r| r.total_last_stands)
            .float("average_speed_during_match", |r| r.average_speed)
    }
}
