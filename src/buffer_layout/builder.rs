use itertools::Itertools as _;

use crate::error::Error;

use super::{BufferLayout, BufferRegion, DataType};

const MIN_COMPONENTS: u32 = 1;
const MAX_COMPONENTS: u32 = 4;
const MIN_COUNT: u32 = 1;

/// How a layout's regions are packed relative to one another.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) enum Packing {
    /// Each region occupies its own contiguous block, back to back.
    #[default]
    NonInterleaved,
    /// All regions alternate vector by vector within one shared row.
    Interleaved,
}

impl Packing {
    /// Byte `(offset, stride)` for every region, in order.
    fn plan(self, regions: &[RegionSpec]) -> Vec<(usize, usize)> {
        match self {
            Packing::NonInterleaved => plan_non_interleaved(regions),
            Packing::Interleaved => plan_interleaved(regions),
        }
    }
}

/// Block-sequential packing: stride is the region's own element pitch, offset
/// the running total of all prior regions' full block sizes.
fn plan_non_interleaved(regions: &[RegionSpec]) -> Vec<(usize, usize)> {
    let mut offset = 0;
    regions
        .iter()
        .map(|region| {
            let planned = (offset, region.bytes_per_vector());
            offset += region.bytes_per_vector() * region.count as usize;
            planned
        })
        .collect()
}

/// Interleaved packing: every region shares one row stride, the sum of all
/// per-vector sizes; offsets accumulate only within the row.
fn plan_interleaved(regions: &[RegionSpec]) -> Vec<(usize, usize)> {
    let row: usize = regions.iter().map(RegionSpec::bytes_per_vector).sum();
    let mut offset = 0;
    regions
        .iter()
        .map(|region| {
            let planned = (offset, row);
            offset += region.bytes_per_vector();
            planned
        })
        .collect()
}

/// Snapshot of the builder's current settings for one named region.
#[derive(Clone, Debug)]
struct RegionSpec {
    name: String,
    components: u32,
    count: u32,
    data_type: DataType,
    normalized: bool,
}

impl RegionSpec {
    fn bytes_per_vector(&self) -> usize {
        self.data_type.size_in_bytes() * self.components as usize
    }
}

/// Accumulates named regions under a carried-forward current state.
///
/// Property setters apply to every region added afterwards, not to ones
/// already in the list. Setters return the builder for chaining:
///
/// ```
/// use glimmer::{BufferLayoutBuilder, Error};
///
/// let mut builder = BufferLayoutBuilder::new();
/// builder.interleaved(true)?.count(100)?;
/// builder.components(3)?.region("position")?;
/// builder.components(2)?.region("texcoord")?;
/// let layout = builder.build();
/// assert_eq!(layout.find("texcoord").unwrap().offset(), 12);
/// # Ok::<(), Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct BufferLayoutBuilder {
    components: u32,
    count: Option<u32>,
    data_type: DataType,
    normalized: bool,
    packing: Packing,
    regions: Vec<RegionSpec>,
}

impl BufferLayoutBuilder {
    /// Creates a builder with four-component, non-normalized float regions,
    /// non-interleaved packing, and no count set.
    pub fn new() -> BufferLayoutBuilder {
        BufferLayoutBuilder {
            components: 4,
            count: None,
            data_type: DataType::Float,
            normalized: false,
            packing: Packing::NonInterleaved,
            regions: Vec::new(),
        }
    }

    /// Changes the number of components per vector in subsequent regions.
    pub fn components(&mut self, components: u32) -> Result<&mut BufferLayoutBuilder, Error> {
        if !(MIN_COMPONENTS..=MAX_COMPONENTS).contains(&components) {
            return Err(Error::InvalidArgument(format!(
                "component count {components} is outside {MIN_COMPONENTS}..={MAX_COMPONENTS}"
            )));
        }
        self.components = components;
        Ok(self)
    }

    /// Changes the number of vectors in subsequent regions.
    ///
    /// Once an interleaved builder holds a region, the count is pinned: rows
    /// can only interleave evenly when every region has the same number of
    /// vectors.
    pub fn count(&mut self, count: u32) -> Result<&mut BufferLayoutBuilder, Error> {
        if count < MIN_COUNT {
            return Err(Error::InvalidArgument(
                "count must be at least one".to_owned(),
            ));
        }
        if self.packing == Packing::Interleaved
            && !self.regions.is_empty()
            && Some(count) != self.count
        {
            return Err(Error::LogicError(
                "counts in an interleaved layout must be equal".to_owned(),
            ));
        }
        self.count = Some(count);
        Ok(self)
    }

    /// Changes the element type of subsequent regions.
    pub fn data_type(&mut self, data_type: DataType) -> &mut BufferLayoutBuilder {
        self.data_type = data_type;
        self
    }

    /// Changes whether subsequent regions hold normalized fixed-point values.
    pub fn normalized(&mut self, normalized: bool) -> &mut BufferLayoutBuilder {
        self.normalized = normalized;
        self
    }

    /// Chooses how the whole layout packs its regions.
    ///
    /// Switching to interleaved requires the regions added so far to share one
    /// count.
    pub fn interleaved(&mut self, interleaved: bool) -> Result<&mut BufferLayoutBuilder, Error> {
        if interleaved && !self.regions.iter().map(|r| r.count).all_equal() {
            return Err(Error::LogicError(
                "counts in an interleaved layout must be equal".to_owned(),
            ));
        }
        self.packing = if interleaved {
            Packing::Interleaved
        } else {
            Packing::NonInterleaved
        };
        Ok(self)
    }

    /// Appends a region snapshotting the current settings under `name`.
    ///
    /// The region's offset and stride stay unset until [`build`] runs the
    /// packing policy. A failed call leaves previously added regions in place.
    ///
    /// [`build`]: BufferLayoutBuilder::build
    pub fn region(&mut self, name: impl Into<String>) -> Result<&mut BufferLayoutBuilder, Error> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::InvalidArgument("region name is empty".to_owned()));
        }
        if self.regions.iter().any(|r| r.name == name) {
            return Err(Error::InvalidArgument(format!(
                "region name `{name}` is already in the layout"
            )));
        }
        let Some(count) = self.count else {
            return Err(Error::LogicError("count has not been set".to_owned()));
        };
        self.regions.push(RegionSpec {
            name,
            components: self.components,
            count,
            data_type: self.data_type,
            normalized: self.normalized,
        });
        Ok(self)
    }

    /// Runs the active packing policy and snapshots an immutable layout.
    ///
    /// May be called repeatedly; each call plans the regions accumulated so
    /// far and returns an independent layout. The builder is not reset.
    pub fn build(&self) -> BufferLayout {
        let plan = self.packing.plan(&self.regions);
        let regions = self
            .regions
            .iter()
            .zip(plan)
            .map(|(spec, (offset, stride))| {
                BufferRegion::new(
                    spec.name.clone(),
                    spec.components,
                    spec.count,
                    spec.data_type,
                    spec.normalized,
                    offset,
                    stride,
                )
            });
        BufferLayout::new(regions, self.packing == Packing::Interleaved)
    }
}

impl Default for BufferLayoutBuilder {
    fn default() -> BufferLayoutBuilder {
        BufferLayoutBuilder::new()
    }
}
