//! JobProperties - tunables read from the attributes of a job node

use serde::{Deserialize, Serialize};
use shared::{AttributeSource, Color, ContentError, Diagnostics};
use std::str::FromStr;

/// How a character behaves when it has nothing particular to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IdleBehavior {
    #[default]
    Passive,
    Active,
    StayInRoom,
}

impl FromStr for IdleBehavior {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "passive" => Ok(IdleBehavior::Passive),
            "active" => Ok(IdleBehavior::Active),
            "stayinroom" => Ok(IdleBehavior::StayInRoom),
            other => Err(format!("unknown idle behavior '{}'", other)),
        }
    }
}

/// Numeric and behavioral tunables of a job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobProperties {
    /// `uicolor`, default `1,1,1,1`
    pub ui_color: Color,
    /// `idlebehavior`, default `Passive`
    pub idle_behavior: IdleBehavior,
    /// `onlyjobspecificdialog`: the character only speaks lines meant for the job. Default `false`
    pub only_job_specific_dialog: bool,
    /// `initialcount`: characters of this job in a new single player crew. Default `0`
    pub initial_count: u32,
    /// `campaignsetupuiorder`: position in the campaign setup UI. Default `10`
    pub campaign_setup_ui_order: i32,
    /// `allowalways`: a client preferring the job gets it regardless of limits. Default `false`
    pub allow_always: bool,
    /// `maxnumber`: crew members that can have the job. Default `100`
    pub max_number: u32,
    /// `minnumber`: crew members required to have the job. Default `0`
    pub min_number: u32,
    /// `minkarma`: karma a player needs to be assigned the job. Default `0`
    pub min_karma: f32,
    /// `pricemultiplier`: multiplier on the base hiring cost. Default `1`
    pub price_multiplier: f32,
    /// `vitalitymodifier`: added to default vitality. Default `0`
    pub vitality_modifier: f32,
    /// `hiddenjob`: not selectable by players, still usable by NPCs. Default `false`
    pub hidden_job: bool,
}

impl Default for JobProperties {
    fn default() -> Self {
        Self {
            ui_color: Color::WHITE,
            idle_behavior: IdleBehavior::Passive,
            only_job_specific_dialog: false,
            initial_count: 0,
            campaign_setup_ui_order: 10,
            allow_always: false,
            max_number: 100,
            min_number: 0,
            min_karma: 0.0,
            price_multiplier: 1.0,
            vitality_modifier: 0.0,
            hidden_job: false,
        }
    }
}

impl JobProperties {
    /// Read the tunables of a job node and validate them.
    pub fn from_element<E: AttributeSource>(element: &E, diagnostics: &mut Diagnostics) -> Self {
        let d = Self::default();
        let context = element.describe();

        let count = |key: &str, default: u32, diagnostics: &mut Diagnostics| {
            let value = element.attribute_int(key, default as i32, diagnostics);
            if value < 0 {
                diagnostics.report(ContentError::invalid_attribute(
                    context.clone(),
                    key,
                    value.to_string(),
                    "can't be negative, using 0",
                ));
                0
            } else {
                value as u32
            }
        };

        let initial_count = count("initialcount", d.initial_count, diagnostics);
        let max_number = count("maxnumber", d.max_number, diagnostics);
        let mut min_number = count("minnumber", d.min_number, diagnostics);
        if min_number > max_number {
            diagnostics.report(ContentError::invalid_attribute(
                context.clone(),
                "minnumber",
                min_number.to_string(),
                format!("above maxnumber ({}), clamping", max_number),
            ));
            min_number = max_number;
        }

        let mut price_multiplier =
            element.attribute_float("pricemultiplier", d.price_multiplier, diagnostics);
        if price_multiplier < 0.0 {
            diagnostics.report(ContentError::invalid_attribute(
                context.clone(),
                "pricemultiplier",
                price_multiplier.to_string(),
                "can't be negative, using 0",
            ));
            price_multiplier = 0.0;
        }

        Self {
            ui_color: element.attribute_color("uicolor", d.ui_color, diagnostics),
            idle_behavior: element.attribute_parse("idlebehavior", d.idle_behavior, diagnostics),
            only_job_specific_dialog: element.attribute_bool(
                "onlyjobspecificdialog",
                d.only_job_specific_dialog,
                diagnostics,
            ),
            initial_count,
            campaign_setup_ui_order: element.attribute_int(
                "campaignsetupuiorder",
                d.campaign_setup_ui_order,
                diagnostics,
            ),
            allow_always: element.attribute_bool("allowalways", d.allow_always, diagnostics),
            max_number,
            min_number,
            min_karma: element.attribute_float("minkarma", d.min_karma, diagnostics),
            price_multiplier,
            vitality_modifier: element.attribute_float(
                "vitalitymodifier",
                d.vitality_modifier,
                diagnostics,
            ),
            hidden_job: element.attribute_bool("hiddenjob", d.hidden_job, diagnostics),
        }
    }
}
