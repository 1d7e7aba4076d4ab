use futures::future::join_all;
use marketlens::analyzer;
use marketlens::analyzer::DisciplineCheck;
use marketlens::cache::TtlCache;
use marketlens::calendar::TradingCalendar;
use marketlens::classifier::classify;
use marketlens::config::{load_config, AppConfig};
use marketlens::model::IndicatorSet;
use marketlens::provider::{PriceHistoryProvider, YahooChartProvider};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{error, info, warn};

const CALENDAR_TTL: Duration = Duration::from_secs(24 * 3600);

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config: Arc<AppConfig> = match load_config("config.json") {
        Ok(cfg) => Arc::new(cfg),
        Err(e) => {
            error!("Config load error: {}", e);
            return;
        }
    };

    // Tickers passed on the command line override the configured list.
    let args: Vec<String> = std::env::args().skip(1).collect();
    let tickers = if args.is_empty() { config.tickers.clone() } else { args };
    if tickers.is_empty() {
        error!("No tickers to process (config is empty and no arguments given).");
        return;
    }

    let provider = match YahooChartProvider::new() {
        Ok(p) => Arc::new(p),
        Err(e) => {
            error!("Failed to build price provider: {}", e);
            return;
        }
    };

    // Calendar cache is owned here, not global; in a fuller setup the miss
    // path would refetch the official exchange calendar.
    let mut calendar_cache: TtlCache<TradingCalendar> = TtlCache::new(CALENDAR_TTL);

    loop {
        let today = chrono::Local::now().date_naive();
        let calendar = match calendar_cache.get() {
            Some(c) => c.clone(),
            None => {
                let c = TradingCalendar::new(config.holidays.iter().copied());
                calendar_cache.put(c.clone());
                c
            }
        };

        if config.force_run || calendar.is_trading_day(today) {
            info!("Processing {} tickers...", tickers.len());
            let tasks: Vec<_> = tickers
                .iter()
                .map(|t| process_ticker(t, provider.clone(), config.clone()))
                .collect();
            join_all(tasks).await;
            info!("Run finished.");
        } else {
            info!("{} is not a trading day, skipping run.", today);
        }

        if config.check_interval_seconds == 0 {
            break;
        }
        info!("Sleeping {}s until the next run...", config.check_interval_seconds);
        sleep(Duration::from_secs(config.check_interval_seconds)).await;
    }
}

/// Processes a single ticker: classify, fetch history, compute indicators,
/// apply the discipline check. Any failure is logged and the ticker is
/// skipped so the rest of the batch continues.
async fn process_ticker(raw: &str, provider: Arc<YahooChartProvider>, config: Arc<AppConfig>) {
    let (market, symbol) = match classify(raw) {
        Ok(pair) => pair,
        Err(e) => {
            warn!("Skipping {:?}: {}", raw, e);
            return;
        }
    };
    info!("Processing {} -> {} [{}]", raw, symbol, market);

    let bars = match provider.fetch_daily(&symbol, market, config.range_days).await {
        Ok(bars) => bars,
        Err(e) => {
            warn!("{}: price history fetch failed: {}", raw, e);
            return;
        }
    };

    let set = match analyzer::compute(&bars, &config.indicators) {
        Ok(set) => set,
        Err(e) => {
            warn!("{}: {}", raw, e);
            return;
        }
    };
    let check = analyzer::evaluate(&set, &config.discipline);

    log_result(raw, &set, &check);
}

fn log_result(raw: &str, set: &IndicatorSet, check: &DisciplineCheck) {
    info!(
        "📊 {}: close {:.2} | MA {:.2}/{:.2}/{:.2} | bias {:.2}% (limit {:.2}%) | {} | {} | swing {:.2}-{:.2}{}",
        raw,
        set.latest_close,
        set.ma_short,
        set.ma_mid,
        set.ma_long,
        set.bias_percent,
        check.effective_bias_threshold,
        set.trend,
        set.volume,
        set.recent_low,
        set.recent_high,
        if check.overextended { " | ⚠️ overextended" } else { "" }
    );
}
