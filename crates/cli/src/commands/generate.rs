use std::path::PathBuf;
use tracing::info;
use webgate_application::use_cases::GenerateConfigUseCase;
use webgate_domain::BuildRequest;

pub struct GenerateArgs {
    pub url: String,
    pub additional_domains: Vec<String>,
    pub block_media: bool,
    pub ads_blocker: bool,
    pub no_ssl: bool,
    pub view_mode: String,
    pub start_url: Option<String>,
    pub output: Option<PathBuf>,
}

impl GenerateArgs {
    fn to_build_request(&self) -> BuildRequest {
        BuildRequest {
            url: self.url.clone(),
            additional_domains: self.additional_domains.clone(),
            block_media: self.block_media,
            view_mode: self.view_mode.clone(),
            start_up_url: self.start_url.clone().unwrap_or_default(),
            ads_blocker: self.ads_blocker,
            no_ssl_mode: self.no_ssl,
        }
    }
}

pub async fn run_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let document = GenerateConfigUseCase::new().execute(&args.to_build_request())?;
    let json = document.to_json_pretty()?;

    match &args.output {
        Some(path) => {
            tokio::fs::write(path, format!("{json}\n")).await?;
            info!(output = %path.display(), "Policy document written");
        }
        None => println!("{json}"),
    }
    Ok(())
}
