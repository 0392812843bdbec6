// File: crates/chart-model/src/lib.rs
// Summary: Plot coordinate and composition model: axes, dataset bindings, range aggregation, transforms and viewport control.

pub mod error;
pub mod range;
pub mod geometry;
pub mod location;
pub mod event;
pub mod scale;
pub mod axis;
pub mod dataset;
pub mod series;
pub mod bounds;
pub mod annotation;
pub mod renderer;
pub mod marker;
pub mod registry;
pub mod binding;
pub mod aggregate;
pub mod config;
pub mod plot;
pub mod viewport;

pub use error::{PlotError, Result};
pub use range::Range;
pub use geometry::{Point, Rect};
pub use location::{AxisGroup, AxisLocation, Orientation, RectEdge};
pub use event::{Listeners, SubscriptionId};
pub use scale::{device_to_value, value_to_device, ScaleKind};
pub use axis::{AutoRangeConfig, AxisChange, AxisRef, ValueAxis};
pub use dataset::{DatasetChange, DatasetRef, XYDataset};
pub use series::{Candle, Series, SeriesCollection, SeriesType};
pub use annotation::{AnnotationBounds, AnnotationRef, BoxAnnotation, LineAnnotation, XYAnnotation};
pub use renderer::{LineRenderer, RendererChange, RendererRef, StackedRenderer, XYItemRenderer};
pub use marker::{Layer, Marker, MarkerKind};
pub use registry::AxisRegistry;
pub use binding::DatasetBinding;
pub use aggregate::RangeAggregator;
pub use config::{PlotConfig, ViewportConfig};
pub use plot::{BatchGuard, Plot, PlotEvent, XYPlot, MAX_PARENT_DEPTH};
pub use viewport::{Pannable, ViewportController, ZoomAnchor, Zoomable};
