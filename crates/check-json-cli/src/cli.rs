use check_json::CheckConfig;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "check-json",
    about = "Check a value in a JSON API response",
    version
)]
pub struct Cli {
    /// A URL to connect to
    #[arg(short, long)]
    pub url: String,
    /// JSON Pointer to the value to report
    #[arg(short, long)]
    pub pointer: String,
    /// Do not check the server certificate
    #[arg(long)]
    pub no_check_certificate: bool,
}

impl Cli {
    pub fn into_config(self) -> CheckConfig {
        CheckConfig::new(self.url, self.pointer).with_skip_cert_verify(self.no_check_certificate)
    }
}
