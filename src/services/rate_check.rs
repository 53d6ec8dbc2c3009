use tracing::{error, info, warn};

use crate::{
    AppState,
    services::{marker, morpho::FetchOutcome},
};

/// Terminal state of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    NoData,
    BelowThreshold,
    Delivered,
    /// Alert was due but did not reach the channel (or the marker could not be written).
    DeliveryFailed,
}

impl RunOutcome {
    pub fn exit_status(self) -> u8 {
        match self {
            RunOutcome::DeliveryFailed => 1,
            RunOutcome::NoData | RunOutcome::BelowThreshold | RunOutcome::Delivered => 0,
        }
    }
}

/// Inclusive: a net rate equal to the threshold fires the alert.
pub fn crosses_threshold(net_rate: f64, threshold: f64) -> bool {
    net_rate >= threshold
}

/// fetch → evaluate → notify → mark. No retries; the scheduler runs us again.
pub async fn run(state: &AppState) -> RunOutcome {
    let settings = &state.settings;

    info!("==================================================");
    info!("Felix Vanilla rate check starting");
    info!("==================================================");

    let snapshot = match state
        .morpho
        .fetch_rate(settings.chain_id, &settings.market_id)
        .await
    {
        FetchOutcome::Available(s) => s,
        FetchOutcome::Unavailable(reason) => {
            warn!(%reason, "failed to fetch rate data, skipping this run");
            return RunOutcome::NoData;
        }
    };

    info!("Borrow APY: {:.2}%", snapshot.borrow_apy);
    info!("Reward APR: -{:.2}%", snapshot.reward_apr);
    info!("Net Rate: {:.2}%", snapshot.net_rate);

    if !crosses_threshold(snapshot.net_rate, settings.rate_threshold) {
        info!(
            "net rate still below threshold ({:.2}% < {:.2}%), continuing to monitor",
            snapshot.net_rate, settings.rate_threshold
        );
        return RunOutcome::BelowThreshold;
    }

    info!(
        "net rate reached threshold ({:.2}% >= {:.2}%), sending notification",
        snapshot.net_rate, settings.rate_threshold
    );

    if let Err(e) = state
        .discord
        .send_rate_alert(snapshot.net_rate, snapshot.borrow_apy, snapshot.reward_apr)
        .await
    {
        error!(error = %e, "failed to send Discord notification");
        return RunOutcome::DeliveryFailed;
    }

    info!("Discord notification sent");

    if let Err(e) = marker::write_marker(&settings.marker_path).await {
        error!(error = %e, "notification delivered but marker could not be written");
        return RunOutcome::DeliveryFailed;
    }

    RunOutcome::Delivered
}
