use crate::bootstrap::load_policy;
use crate::di::Services;
use std::path::Path;
use webgate_application::use_cases::RequestVerdict;

pub async fn run_classify(
    config_path: &Path,
    urls: &[String],
    sub_resource: bool,
) -> anyhow::Result<()> {
    let services = Services::new(load_policy(config_path).await?);
    let is_main_frame = !sub_resource;

    for url in urls {
        let verdict = services.classify_request.execute(url, is_main_frame);
        println!("{}", format_verdict(url, &verdict));
    }
    Ok(())
}

pub(crate) fn format_verdict(url: &str, verdict: &RequestVerdict) -> String {
    format!("{}\t{}\t{}", verdict.disposition, verdict.action, url)
}
