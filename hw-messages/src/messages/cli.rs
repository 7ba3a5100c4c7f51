//! Messages printed by the hwinfo binary

pub struct CliMessages {
    pub error_generic: &'static str,
    pub fixture_hint: &'static str,
    pub logging_init_failed: &'static str,
    pub unsupported_host: &'static str,
}

pub const CLI_MESSAGES: CliMessages = CliMessages {
    error_generic: "❌ Error: {error}",
    fixture_hint: "Fixture files look like {\"attributes\": {\"hw.packages\": {\"i32\": 1}}, \"displays\": []}",
    logging_init_failed: "Failed to initialize logging: {error}",
    unsupported_host: "Host '{platform}' exposes no hardware attributes; every field will be omitted",
};
