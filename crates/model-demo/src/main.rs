// File: crates/model-demo/src/main.rs
// Summary: Demo loads OHLC CSV (or synthesises candles), builds a price/spread plot and logs ranges, mappings and gestures.

use anyhow::{Context, Result};
use chart_model::series::{Candle, SeriesType};
use chart_model::{
    AxisGroup, BoxAnnotation, Layer, LineRenderer, Marker, PlotConfig, Point, Rect, Series, SeriesCollection,
    StackedRenderer, ValueAxis, ViewportController, XYPlot, ZoomAnchor,
};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let candles = match std::env::args().nth(1) {
        Some(raw) => {
            let (path, used_alt) = resolve_path(&raw)?;
            info!(path = %path.display(), used_alt, "loading candles");
            load_ohlc_csv(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?
        }
        None => {
            info!("no input file given, using synthetic candles");
            synthetic_candles(500)
        }
    };
    if candles.is_empty() {
        anyhow::bail!("no candles loaded, check headers/delimiter");
    }
    info!(count = candles.len(), "candles ready");

    // Price on range axis 0 (left), candle spread on range axis 1 (right).
    let time = ValueAxis::new("Time").shared();
    let price = ValueAxis::new("Price").shared();
    let spread = ValueAxis::new("High - Low").shared();
    let spreads: Vec<(f64, f64)> = candles.iter().map(|c| (c.t, c.h - c.l)).collect();

    let plot = XYPlot::with_config(PlotConfig::default().pannable());
    plot.set_axis(AxisGroup::Domain, 0, Some(time.clone()));
    plot.set_axis(AxisGroup::Range, 0, Some(price.clone()));
    plot.set_axis(AxisGroup::Range, 1, Some(spread.clone()));
    plot.set_renderer(0, Some(Rc::new(LineRenderer::new())));
    plot.set_renderer(1, Some(Rc::new(StackedRenderer::new())));
    plot.set_dataset(0, Some(SeriesCollection::from_series(vec![Series::from_candles(candles).named("ohlc")]).shared()));
    plot.set_dataset(
        1,
        Some(SeriesCollection::from_series(vec![Series::with_data(SeriesType::Histogram, spreads).named("spread")]).shared()),
    );
    plot.map_dataset_to_axis(AxisGroup::Range, 1, 1)?;

    let events = Rc::new(std::cell::Cell::new(0usize));
    let seen = events.clone();
    plot.subscribe(move |e| {
        seen.set(seen.get() + 1);
        tracing::debug!(?e, "plot event");
    });

    for (group, index, axis) in [
        (AxisGroup::Domain, 0, &time),
        (AxisGroup::Range, 0, &price),
        (AxisGroup::Range, 1, &spread),
    ] {
        info!(
            ?group,
            index,
            label = %axis.label(),
            edge = ?plot.axis_edge(group, index),
            data = ?plot.data_range(axis),
            visible = %axis.range(),
            "axis"
        );
    }

    let area = Rect::from_ltwh(72.0, 24.0, 928.0, 560.0);
    let mid = time.range().central_value();
    let x_px = plot.value_to_device(AxisGroup::Domain, 0, mid, &area).unwrap_or(f64::NAN);
    info!(value = mid, device = x_px, "domain mapping");
    if let Some(p) = plot.data_to_device(0, mid, price.range().central_value(), &area) {
        info!(x = p.x, y = p.y, "centre of price plot");
    }

    let session = BoxAnnotation::new(mid, price.lower_bound(), mid + time.range().length() * 0.1, price.upper_bound())?;
    plot.add_annotation(Rc::new(session));
    plot.add_marker(AxisGroup::Range, 0, Marker::value(price.range().central_value()).labelled("mid"), Layer::Foreground);

    let ctl = ViewportController::default();
    let anchor = ZoomAnchor::new(Point::new(area.center_x(), area.center_y()), area);
    ctl.zoom_in_both(&plot, Some(&anchor))?;
    info!(time = %time.range(), price = %price.range(), "after zoom in");
    ctl.pan_by_pixels(&plot, -120.0, 30.0, &area)?;
    info!(time = %time.range(), price = %price.range(), "after pan");
    let selection = Rect::from_ltrb(200.0, 100.0, 600.0, 400.0);
    ctl.zoom_to_selection(&plot, &selection, &area)?;
    info!(time = %time.range(), price = %price.range(), "after selection zoom");
    ctl.restore_auto_bounds(&plot);
    info!(time = %time.range(), price = %price.range(), spread = %spread.range(), "restored");

    if plot.needs_configure() {
        warn!("plot still stale after restore");
    }
    info!(events = events.get(), "done");
    Ok(())
}

fn synthetic_candles(n: usize) -> Vec<Candle> {
    let mut out = Vec::with_capacity(n);
    let mut price = 100.0f64;
    for i in 0..n {
        let o = price;
        let c = o + (i as f64 * 0.07).sin() * 1.5 + 0.05;
        let h = o.max(c) + 0.8;
        let l = o.min(c) - 0.8;
        if let Ok(k) = Candle::try_new(i as f64, o, h, l, c) {
            out.push(k);
        }
        price = c;
    }
    out
}

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(raw: &str) -> Result<(PathBuf, bool)> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

/// Load Binance-like OHLC CSV into Candle vec. Rows that fail the candle checks are skipped.
fn load_ohlc_csv(path: &Path) -> Result<Vec<Candle>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    tracing::debug!(?headers, "csv headers");
    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));

    let i_time = idx(&["time", "timestamp", "open_time", "date", "datetime"]);
    let i_open = idx(&["open", "o"]);
    let i_high = idx(&["high", "h"]);
    let i_low = idx(&["low", "l"]);
    let i_close = idx(&["close", "c", "adj_close", "close_price"]);
    if i_open.is_none() || i_high.is_none() || i_low.is_none() || i_close.is_none() {
        warn!("could not find one of open/high/low/close columns");
    }

    let mut out = Vec::new();
    let mut skipped = 0usize;
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let parse = |i: Option<usize>| i.and_then(|ix| rec.get(ix)).and_then(|s| s.trim().parse::<f64>().ok());
        let t = i_time.and_then(|ix| rec.get(ix)).and_then(parse_time_to_f64).unwrap_or(row as f64);
        if let (Some(o), Some(h), Some(l), Some(c)) = (parse(i_open), parse(i_high), parse(i_low), parse(i_close)) {
            match Candle::try_new(t, o, h, l, c) {
                Ok(k) => out.push(k),
                Err(_) => skipped += 1,
            }
        }
    }
    if skipped > 0 {
        warn!(skipped, "rows rejected as malformed candles");
    }
    Ok(out)
}

fn parse_time_to_f64(s: &str) -> Option<f64> {
    let n = s.trim().parse::<i64>().ok()?;
    // epoch ms -> sec
    if n > 10_i64.pow(12) {
        return Some(n as f64 / 1000.0);
    }
    Some(n as f64)
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => alt.set_extension("csv"),
        "csv" => alt.set_extension("cvs"),
        _ => return None,
    };
    Some(alt)
}
