use crate::process::decode::Columns;
use crate::process::fields::Timestamp;
use crate::schema::{Exportable, OutputFields};
use crate::sections::{Section, SectionInfo};

/// One campaign checkpoint reached in Black Ops 6.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bo6Checkpoint {
    pub timestamp: Timestamp,
    pub account_type: String,
    pub device_type: String,
    pub difficulty: String,
    pub level_name: String,
    pub checkpoint: String,
    /// Seconds.
    pub checkpoint_duration: f64,
    pub deaths: i64,
    pub fails: i64,
}

impl Section for Bo6Checkpoint {
    const INFO: SectionInfo = SectionInfo {
        name: "bo6-campaign",
        title: "Call of Duty: Black Ops 6",
        subtitle: "Campaign Checkpoint Data (reverse chronological)",
        file_stem: "black_ops_6_campaign_checkpoints",
    };

    fn columns() -> Columns<Self> {
        Columns::<Self>::new()
            .timestamp("UTC Timestamp", |r, v| r.timestamp = v)
            .text("Account Type", |r, v| r.account_type = v)
            .text("Device Type", |r, v| r.device_type = v)
            .text("Difficulty", |r, v| r.difficulty = v)
            .text("Level Name", |r, v| r.level_name = v)
            .text("Checkpoint", |r, v| r.checkpoint = v)
            .float("Checkpoint Duration", |r, v| r.checkpoint_duration = v)
            .int("Deaths", |r, v| r.deaths = v)
            .int("Fails", |r, v| r.fails = v)
    }
}

impl Exportable for Bo6Checkpoint {
    fn output_fields() -> OutputFields<Self> {
        OutputFields::<Self>::new()
            .timestamp("timestamp_utc", |r| r.timestamp)
            .label("account_type", |r| r.account_type.as_str())
            .label("device_type", |r| r.device_type.as_str())
            .label("difficulty", |r| r.difficulty.as_str())
            .label("level_name", |r| r.level_name.as_str())
            .label("checkpoint", |r| r.checkpoint.as_str())
            .float("checkpoint_duration_s", |r| r.checkpoint_duration)
            .int("deaths", |r| r.deaths)
            .int("fails", |r| r.fails)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::decode::decode;

    #[test]
    fn decodes_a_checkpoint_row() {
        let header: Vec<String> = Bo6Checkpoint::columns().names().map(String::from).collect();
        let row: Vec<String> = [
            "2024-11-02 21:14:07",
            "Battle.net",
            "PC",
            "Veteran",
            "Most Wanted",
            "Checkpoint 3",
            "412.5",
            "4",
            "1",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        let cp: Bo6Checkpoint = decode(&header, &row, &Bo6Checkpoint::columns()).unwrap();
        assert_eq!(cp.level_name, "Most Wanted");
        assert_eq!(cp.checkpoint_duration, 412.5);
        assert_eq!(cp.deaths, 4);

        assert_eq!(
            cp.to_delimited_fields(),
            vec![
                "2024-11-02T21:14:07Z",
                "Battle.net",
                "PC",
                "Veteran",
                "Most Wanted",
                "Checkpoint 3",
                "412.50",
                "4",
                "1",
            ]
        );
    }
}
