//! Core-Domänenmodelle: Kamera, Karte, Annotationen, Kalibrierung, Instrumente.

pub mod annotation;
pub mod camera;
pub mod chart;
pub mod geo;
pub mod instrument;
pub mod spatial;

pub use annotation::{Annotation, AnnotationId, AnnotationKind, AnnotationStore, ArcShape};
pub use camera::Camera2D;
pub use chart::ChartImage;
pub use geo::{format_dms, format_lat_lon, nautical_miles_between, GeoAxis, GeoCalibration, GeoPoint};
pub use instrument::{Bounds2D, CompassGeometry, Instrument, InstrumentKind, InstrumentSet};
pub use spatial::{SpatialIndex, SpatialMatch};
