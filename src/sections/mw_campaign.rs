use crate::process::decode::Columns;
use crate::process::fields::Timestamp;
use crate::schema::{Exportable, OutputFields};
use crate::sections::{Section, SectionInfo};

/// One completed Modern Warfare campaign segment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MwCampaignSegment {
    pub timestamp: Timestamp,
    pub platform: String,
    pub campaign_screen_name: String,
    pub campaign_difficulty: String,
    /// Seconds.
    pub time_to_complete: f64,
    pub deaths: i64,
    pub fails: i64,
}

impl Section for MwCampaignSegment {
    const INFO: SectionInfo = SectionInfo {
        name: "mw-campaign",
        title: "Call of Duty: Modern Warfare",
        subtitle: "Campaign Checkpoint Data (reverse chronological)",
        file_stem: "modern_warfare_campaign_segments",
    };

    fn columns() -> Columns<Self> {
        Columns::<Self>::new()
            .timestamp("UTC Timestamp", |r, v| r.timestamp = v)
            .text("Platform", |r, v| r.platform = v)
            .text("Campaign Screen Name", |r, v| r.campaign_screen_name = v)
            .text("Campaign Difficulty", |r, v| r.campaign_difficulty = v)
            .float("Time to Complete Campaign Segment", |r, v| r.time_to_complete = v)
            .int("Deaths During Campaign Segment", |r, v| r.deaths = v)
            .int("Fails During Campaign Segment", |r, v| r.fails = v)
    }
}

impl Exportable for MwCampaignSegment {
    fn output_fields() -> OutputFields<Self> {
        OutputFields::<Self>::new()
            .timestamp("timestamp_utc", |r| r.timestamp)
            .label("platform", |r| r.platform.as_str())
            .label("campaign_screen_name", |r| r.campaign_screen_name.as_str())
            .label("campaign_difficulty", |r| r.campaign_difficulty.as_str())
            .float("time_to_complete_campaign_segment_s", |r| r.time_to_complete)
            .int("deaths_during_campaign_segment", |r| r.deaths)
            .int("fails_during_campaign_segment", |r| r.fails)
    }
}
