use crate::process::decode::Columns;
use crate::process::fields::Timestamp;
use crate::schema::{Exportable, OutputFields};
use crate::sections::{Section, SectionInfo};

/// One Warzone 2.0 (battle royale) match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Warzone2Match {
    pub timestamp: Timestamp,
    pub device_type: String,
    pub account_type: String,
    pub map: String,
    pub match_outcome: String,
    pub skill: i64,
    pub score: i64,
    pub shots: i64,
    pub hits: i64,
    pub assists: i64,
    pub longest_streak: i64,
    pub kills: i64,
    pub deaths: i64,
    pub headshots: i64,
    pub executions: i64,
    pub suicides: i64,
    pub damage_done: i64,
    pub damage_taken: i64,
    pub total_xp: i64,
    pub score_xp: i64,
    pub challenge_xp: i64,
    pub match_xp: i64,
    pub medal_xp: i64,
    pub bonus_xp: i64,
    pub misc_xp: i64,
    pub accolade_xp: i64,
    pub weapon_xp: i64,
    pub operator_xp: i64,
    pub clan_xp: i64,
    pub battle_pass_xp: i64,
    pub rank_at_start: i64,
    pub rank_at_end: i64,
    pub xp_at_start: i64,
    pub xp_at_end: i64,
    pub score_at_start: i64,
    pub score_at_end: i64,
    pub prestige_at_start: i64,
    pub prestige_at_end: i64,
    pub lifetime_wall_bangs: i64,
    pub lifetime_games_played: i64,
    pub lifetime_time_played: i64,
    pub lifetime_wins: i64,
    pub lifetime_losses: i64,
    pub lifetime_kills: i64,
    pub lifetime_deaths: i64,
    pub lifetime_hits: i64,
    pub lifetime_misses: i64,
    pub lifetime_near_misses: i64,
}

impl Section for Warzone2Match {
    const INFO: SectionInfo = SectionInfo {
        name: "warzone2",
        title: "Call of Duty: Warzone 2.0",
        subtitle: "Multiplayer Match Data (reverse chronological)",
        file_stem: "warzone_2_multiplayer_matches",
    };

    fn columns() -> Columns<Self> {
        Columns::<Self>::new()
            .timestamp("UTC Timestamp", |r, v| r.timestamp = v)
            .text("Device Type", |r, v| r.device_type = v)
            .text("Account Type", |r, v| r.account_type = v)
            .text("Map", |r, v| r.map = v)
            .text("Match Outcome", |r, v| r.match_outcome = v)
            .int("Skill", |r, v| r.skill = v)
            .int("Score", |r, v| r.score = v)
            .int("Shots", |r, v| r.shots = v)
            .int("Hits", |r, v| r.hits = v)
            .int("Assists", |r, v| r.assists = v)
            .int("Longest Streak", |r, v| r.longest_streak = v)
            .int("Kills", |r, v| r.kills = v)
            .int("Deaths", |r, v| r.deaths = v)
            .int("Headshots", |r, v| r.headshots = v)
            .int("Executions", |r, v| r.executions = v)
            .int("Suicides", |r, v| r.suicides = v)
            .int("Damage Done", |r, v| r.damage_done = v)
            .int("Damage Taken", |r, v| r.damage_taken = v)
            .int("Total XP", |r, v| r.total_xp = v)
            .int("Score XP", |r, v| r.score_xp = v)
            .int("Challenge XP", |r, v| r.challenge_xp = v)
            .int("Match XP", |r, v| r.match_xp = v)
            .int("Medal XP", |r, v| r.medal_xp = v)
            .int("Bonus XP", |r, v| r.bonus_xp = v)
            .int("Misc XP", |r, v| r.misc_xp = v)
            .int("Accolade XP", |r, v| r.accolade_xp = v)
            .int("Weapon XP", |r, v| r.weapon_xp = v)
            .int("Operator XP", |r, v| r.operator_xp = v)
            .int("Clan XP", |r, v| r.clan_xp = v)
            .int("Battle Pass XP", |r, v| r.battle_pass_xp = v)
            .int("Rank at Start", |r, v| r.rank_at_start = v)
            .int("Rank at End", |r, v| r.rank_at_end = v)
            .int("XP at Start", |r, v| r.xp_at_start = v)
            .int("XP at End", |r, v| r.xp_at_end = v)
            .int("Score at Start", |r, v| r.score_at_start = v)
            .int("Score at End", |r, v| r.score_at_end = v)
            .int("Prestige at Start", |r, v| r.prestige_at_start = v)
            .int("Prestige at End", |r, v| r.prestige_at_end = v)
            .int("Lifetime Wall Bangs", |r, v| r.lifetime_wall_bangs = v)
            .int("Lifetime Games Played", |r, v| r.lifetime_games_played = v)
            .int("Lifetime Time Played", |r, v| r.lifetime_time_played = v)
            .int("Lifetime Wins", |r, v| r.lifetime_wins = v)
            .int("Lifetime Losses", |r, v| r.lifetime_losses = v)
            .int("Lifetime Kills", |r, v| r.lifetime_kills = v)
            .int("Lifetime Deaths", |r, v| r.lifetime_deaths = v)
            .int("Lifetime Hits", |r, v| r.lifetime_hits = v)
            .int("Lifetime Misses", |r, v| r.lifetime_misses = v)
            .int("Lifetime Near Misses", |r, v| r.lifetime_near_misses = v)
    }
}

impl Exportable for Warzone2Match {
    fn output_fields() -> OutputFields<Self> {
        OutputFields::<Self>::new()
            .timestamp("timestamp_utc", |r| r.timestamp)
            .label("device_type", |r| r.device_type.as_str())
            .label("account_type", |r| r.account_type.as_str())
            .label("map", |r| r.map.as_str())
            .label("match_outcome", |r| r.match_outcome.as_str())
            .int("skill", |r| r.skill)
            .int("score", |r| r.score)
            .int("shots", |r| r.shots)
            .int("hits", |r| r.hits)
            .int("assists", |r| r.assists)
            .int("longest_streak", |r| r.longest_streak)
            .int("kills", |r| r.kills)
            .int("deaths", |r| r.deaths)
            .int("headshots", |r| r.headshots)
            .int("executions", |r| r.executions)
            .int("suicides", |r| r.suicides)
            .int("damage_done", |r| r.damage_done)
            .int("damage_taken", |r| r.damage_taken)
            .int("total_xp", |r| r.total_xp)
            .int("score_xp", |r| r.score_xp)
            .int("challenge_xp", |r| r.challenge_xp)
            .int("match_xp", |r| r.match_xp)
            .int("medal_xp", |r| r.medal_xp)
            .int("bonus_xp", |r| r.bonus_xp)
            .int("misc_xp", |r| r.misc_xp)
            .int("accolade_xp", |r| r.accolade_xp)
            .int("weapon_xp", |r| r.weapon_xp)
            .int("operator_xp", |r| r.operator_xp)
            .int("clan_xp", |r| r.clan_xp)
            .int("battle_pass_xp", |r| r.battle_pass_xp)
            .int("rank_at_start", |r| r.rank_at_start)
            .int("rank_at_end", |r| r.rank_at_end)
            .int("xp_at_start", |r| r.xp_at_start)
            .int("xp_at_end", |r| r.xp_at_end)
            .int("score_at_start", |r| r.score_at_start)
            .int("score_at_end", |r| r.score_at_end)
            .int("prestige_at_start", |r| r.prestige_at_start)
            .int("prestige_at_end", |r| r.prestige_at_end)
            .int("lifetime_wall_bangs", |r| r.lifetime_wall_bangs)
            .int("lifetime_games_played", |r| r.lifetime_games_played)
            .int("lifetime_time_played", |r| r.lifetime_time_played)
            .int("lifetime_wins", |r| r.lifetime_wins)
            .int("lifetime_losses", |r| r.lifetime_losses)
            .int("lifetime_kills", |r| r.lifetime_kills)
            .int("lifetime_deaths", |r| r.lifetime_deaths)
            .int("lifetime_hits", |r| r.lifetime_hits)
            .int("lifetime_misses", |r| r.lifetime_misses)
            .int("lifetime_near_misses", |r| r.lifetime_near_misses)
    }
}
