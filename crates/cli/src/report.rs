use chrono::{DateTime, Utc};
use ferrous_locator_application::use_cases::LocatorSnapshot;
use ferrous_locator_domain::ServiceInterfaceName;
use std::fmt::Write;

/// Plain-text summary of a snapshot: status, home community id, the URL of
/// every catalogued interface ("-" where none is available) and the raw
/// module paths, sorted by name.
pub fn render(snapshot: &LocatorSnapshot, now: DateTime<Utc>) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "fqdn:   {}", snapshot.fqdn.as_deref().unwrap_or("-"));
    let _ = writeln!(out, "status: {}", snapshot.status);
    let _ = writeln!(
        out,
        "hcid:   {}",
        snapshot.home_community_id_at(now).as_deref().unwrap_or("-")
    );

    let width = ServiceInterfaceName::ALL
        .iter()
        .map(|iface| iface.to_string().len())
        .max()
        .unwrap_or(0);

    for iface in &ServiceInterfaceName::ALL {
        let url = snapshot
            .endpoint_url_at(iface, now)
            .map_or_else(|| "-".to_string(), |uri| uri.to_string());
        let _ = writeln!(out, "{:width$}  {}", iface.to_string(), url, width = width);
    }

    let mut modules: Vec<_> = snapshot.endpoints.iter().collect();
    modules.sort_unstable_by_key(|(name, _)| *name);

    let _ = writeln!(out, "modules: {}", modules.len());
    for (name, entry) in modules {
        let state = if entry.is_valid_at(now) { "valid" } else { "expired" };
        let _ = writeln!(
            out,
            "  {:6} {} ({} until {})",
            name,
            entry.path,
            state,
            entry.valid_until.to_rfc3339()
        );
    }

    out
}
