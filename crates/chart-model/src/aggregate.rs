// File: crates/chart-model/src/aggregate.rs
// Summary: Union of the data extents one axis has to show.

use crate::annotation::{AnnotationBounds, AnnotationRef};
use crate::binding::DatasetBinding;
use crate::bounds;
use crate::location::AxisGroup;
use crate::range::Range;

/// Read-only view over a plot's bindings and plot-level annotations.
pub struct RangeAggregator<'a> {
    binding: &'a DatasetBinding,
    annotations: &'a [AnnotationRef],
}

impl<'a> RangeAggregator<'a> {
    pub fn new(binding: &'a DatasetBinding, annotations: &'a [AnnotationRef]) -> Self {
        Self { binding, annotations }
    }

    /// Combined bounds of every dataset mapped to `axis_index` of `group`.
    ///
    /// Each dataset is measured by its effective renderer when there is one,
    /// otherwise by a plain scan. Axis 0 also covers annotations (plot-level and
    /// those of the renderers involved) that opt in to data bounds.
    pub fn data_range(&self, group: AxisGroup, axis_index: usize) -> Option<Range> {
        let include_annotations = axis_index == 0;
        let mut result = None;
        for (index, dataset) in self.binding.datasets_mapped_to_axis(group, axis_index) {
            let dataset = dataset.as_ref();
            let extent = match self.binding.renderer_for_dataset(index) {
                Some(renderer) => {
                    if include_annotations {
                        for a in renderer.annotations() {
                            result = Range::combine(result, annotation_extent(a.bounds_info(), group));
                        }
                    }
                    match group {
                        AxisGroup::Domain => renderer.find_domain_bounds(dataset),
                        AxisGroup::Range => renderer.find_range_bounds(dataset),
                    }
                }
                None => match group {
                    AxisGroup::Domain => bounds::find_domain_bounds(dataset),
                    AxisGroup::Range => bounds::find_range_bounds(dataset),
                },
            };
            result = Range::combine(result, extent);
        }
        if include_annotations {
            for a in self.annotations {
                result = Range::combine(result, annotation_extent(a.bounds_info(), group));
            }
        }
        result
    }
}

fn annotation_extent(info: Option<AnnotationBounds>, group: AxisGroup) -> Option<Range> {
    let info = info.filter(|b| b.include_in_data_bounds)?;
    Some(match group {
        AxisGroup::Domain => info.x_range,
        AxisGroup::Range => info.y_range,
    })
}
