use crate::process::decode::Columns;
use crate::process::fields::Timestamp;
use crate::schema::{Exportable, OutputFields};
use crate::sections::{Section, SectionInfo};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MwMultiplayerMatch {
    pub timestamp: Timestamp,
    pub match_id: String,
    pub platform: String,
    pub game_type: String,
    pub map: String,
    pub rank: i64,
    pub score: i64,
    pub assists: i64,
    pub kills: i64,
    pub deaths: i64,
    pub headshots: i64,
    pub longest_streak: i64,
    pub total_xp_earned: i64,
}

impl Section for MwMultiplayerMatch {
    const INFO: SectionInfo = SectionInfo {
        name: "mw-multiplayer",
        title: "Call of Duty: Modern Warfare",
        subtitle: "Multiplayer Match Data (reverse chronological)",
        file_stem: "modern_warfare_multiplayer_matches",
    };

    fn columns() -> Columns<Self> {
        Columns::<Self>::new()
            .timestamp("UTC Timestamp", |r, v| r.timestamp = v)
            .text("Match ID", |r, v| r.match_id = v)
            .text("Platform", |r, v| r.platform = v)
            .text("Game Type Screen Name", |r, v| r.game_type = v)
            .text("Map Screen Name", |r, v| r.map = v)
            .int("Rank", |r, v| r.rank = v)
            .int("Score", |r, v| r.score = v)
            .int("Assists", |r, v| r.assists = v)
            .int("Kills", |r, v| r.kills = v)
            .int("Deaths", |r, v| r.deaths = v)
            .int("Headshots", |r, v| r.headshots = v)
            .int("Longest Streak", |r, v| r.longest_streak = v)
            .int("Total XP Earned", |r, v| r.total_xp_earned = v)
    }
}

impl Exportable for MwMultiplayerMatch {
    fn output_fields() -> OutputFields<Self> {
        OutputFields::<Self>::new()
            .timestamp("timestamp_utc", |r| r.timestamp)
            .text("match_id", |r| r.match_id.as_str())
            .label("platform", |r| r.platform.as_str())
            .label("game_type_screen_name", |r| r.game_type.as_str())
            .label("map_screen_name", |r| r.map.as_str())
            .int("rank", |r| r.rank)
            .int("score", |r| r.score)
            .int("assists", |r| r.assists)
            .int("kills", |r| r.kills)
            .int("deaths", |r| r.deaths)
            .int("headshots", |r| r.headshots)
            .int("longest_streak", |r| r.longest_streak)
            .int("total_xp_earned", |r| r.total_xp_earned)
    }
}
