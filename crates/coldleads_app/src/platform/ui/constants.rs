pub const APP_TITLE: &str = "ColdLeads AI";
pub const TAGLINE: &str =
    "One URL. One click. A personalized cold email to the right decision-maker.";

pub const CMD_COPY: &str = ":copy";
pub const CMD_COMPOSE: &str = ":compose";
pub const CMD_HELP: &str = ":help";
pub const CMD_QUIT: &str = ":quit";

pub const LABEL_INPUT: &str = "Company URL";
pub const INPUT_PLACEHOLDER: &str = "e.g. https://swiggy.com";
pub const LABEL_SUMMARY: &str = "Lead summary";
pub const LABEL_IDENTITY: &str = "Target Identity";
pub const LABEL_PULSE: &str = "Company Pulse";
pub const LABEL_EMAIL: &str = "The Email";
pub const LABEL_COMPOSE: &str = "Draft in Gmail";

pub const RULE_WIDTH: usize = 60;
