use std::time::Instant;

use country_routing_core::{BorderGraph, Router};
use serde::Deserialize;
use tracing::{info, warn};

use crate::config::Source;
use crate::error::LoadError;
use crate::state::GraphState;

/// How many offending codes to spell out in data-quality warnings.
const WARN_SAMPLE: usize = 10;

/// One entry of the countries document. Everything except the code and its
/// land borders is ignored.
#[derive(Debug, Deserialize)]
struct CountryRecord {
    cca3: String,
    #[serde(default)]
    borders: Option<Vec<String>>,
}

/// Fetch the countries document, build the border graph and its router.
pub async fn load(source: &Source) -> Result<GraphState, LoadError> {
    let start = Instant::now();

    let json = fetch(source).await?;
    let graph = parse_borders(&json)?;
    report_data_quality(&graph);

    let node_count = graph.node_count();
    let edge_count = graph.edge_count();
    let router = Router::new(graph);
    let load_time_ms = start.elapsed().as_secs_f64() * 1000.0;

    info!(
        source = %source,
        countries = node_count,
        borders = edge_count,
        islands = router.islands().island_count(),
        load_time_ms,
        "border graph loaded"
    );

    Ok(GraphState {
        router,
        source: source.to_string(),
        load_time_ms,
        loaded_at: Instant::now(),
    })
}

async fn fetch(source: &Source) -> Result<String, LoadError> {
    match source {
        Source::Url(url) => {
            let body = reqwest::get(url).await?.error_for_status()?.text().await?;
            Ok(body)
        }
        Source::File(path) => Ok(tokio::fs::read_to_string(path).await?),
    }
}

/// Parse a countries JSON array into a border graph, keeping document order.
pub fn parse_borders(json: &str) -> Result<BorderGraph, LoadError> {
    let records: Vec<CountryRecord> = serde_json::from_str(json)?;
    let graph = BorderGraph::from_borders(
        records
            .into_iter()
            .map(|r| (r.cca3, r.borders.unwrap_or_default())),
    )?;
    Ok(graph)
}

/// Border data the router will take literally: one-way borders and border
/// codes with no record of their own. Samples hold at most `WARN_SAMPLE`
/// entries in graph order.
#[derive(Debug, Default, PartialEq, Eq)]
struct DataQuality {
    one_way_count: usize,
    one_way_sample: Vec<String>,
    unlisted_count: usize,
    unlisted_sample: Vec<String>,
}

impl DataQuality {
    fn inspect(graph: &BorderGraph) -> Self {
        let asymmetric = graph.asymmetric_borders();
        let unlisted = graph.unlisted_codes();
        Self {
            one_way_count: asymmetric.len(),
            one_way_sample: asymmetric
                .iter()
                .take(WARN_SAMPLE)
                .map(|&(a, b)| format!("{}->{}", graph.code(a), graph.code(b)))
                .collect(),
            unlisted_count: unlisted.len(),
            unlisted_sample: unlisted
                .iter()
                .take(WARN_SAMPLE)
                .map(|c| c.to_string())
                .collect(),
        }
    }
}

/// Warn about questionable border data. Nothing is repaired.
fn report_data_quality(graph: &BorderGraph) {
    let quality = DataQuality::inspect(graph);
    if quality.one_way_count > 0 {
        warn!(
            count = quality.one_way_count,
            sample = %quality.one_way_sample.join(", "),
            "border data lists one-way borders; routes follow them as given"
        );
    }
    if quality.unlisted_count > 0 {
        warn!(
            count = quality.unlisted_count,
            sample = %quality.unlisted_sample.join(", "),
            "border data references countries it does not list"
        );
    }
}
