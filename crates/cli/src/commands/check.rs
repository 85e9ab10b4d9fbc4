use crate::bootstrap::load_policy;
use std::path::Path;
use webgate_domain::{PolicyConfig, TlsErrorPolicy};

pub async fn run_check(config_path: &Path) -> anyhow::Result<()> {
    let policy = load_policy(config_path).await?;
    print!("{}", summary(&policy));
    Ok(())
}

pub(crate) fn summary(policy: &PolicyConfig) -> String {
    let tls = match policy.tls_error_policy() {
        TlsErrorPolicy::Reject => "reject",
        TlsErrorPolicy::Proceed => "proceed (certificate errors bypassed)",
    };

    let mut out = String::new();
    out.push_str(&format!("domain:          {}\n", policy.domain()));
    out.push_str(&format!("start url:       {}\n", policy.start_url()));
    out.push_str(&format!(
        "allowed domains: {}\n",
        policy
            .allowed_domains()
            .iter()
            .map(|d| &**d)
            .collect::<Vec<_>>()
            .join(", ")
    ));
    out.push_str(&format!("block media:     {}\n", policy.block_media()));
    out.push_str(&format!("ad blocker:      {}\n", policy.ad_blocker()));
    out.push_str(&format!("tls errors:      {tls}\n"));
    let orientation = policy.orientation();
    if orientation.is_locked() {
        out.push_str(&format!("orientation:     {orientation} (locked)\n"));
    } else {
        out.push_str(&format!("orientation:     {orientation}\n"));
    }
    out
}
