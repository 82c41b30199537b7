//! Vertex buffer layout planning.
//!
//! A [`BufferLayoutBuilder`] accumulates named regions of vertex data and
//! [`BufferLayoutBuilder::build`] bakes their byte geometry under one of two
//! packing policies: back-to-back blocks or one shared interleaved row. The
//! resulting [`BufferLayout`] is what attribute-binding code iterates when
//! pointing the graphics driver at a buffer.

mod builder;

pub use builder::BufferLayoutBuilder;

use indexmap::IndexMap;

/// Element type of the vectors in a region.
///
/// All recognized types are 32-bit.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DataType {
    /// 32-bit float.
    #[default]
    Float,
    /// 32-bit signed integer.
    Int,
    /// 32-bit unsigned integer.
    UnsignedInt,
}

impl DataType {
    /// Size of one element in bytes.
    pub fn size_in_bytes(self) -> usize {
        match self {
            DataType::Float => 4,
            DataType::Int => 4,
            DataType::UnsignedInt => 4,
        }
    }
}

/// Named slice of homogeneous vertex data within a buffer.
///
/// Regions are produced by [`BufferLayoutBuilder::build`] with their byte
/// geometry already computed; application code only reads them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BufferRegion {
    name: String,
    components: u32,
    count: u32,
    data_type: DataType,
    normalized: bool,
    offset: usize,
    stride: usize,
}

impl BufferRegion {
    pub(crate) fn new(
        name: String,
        components: u32,
        count: u32,
        data_type: DataType,
        normalized: bool,
        offset: usize,
        stride: usize,
    ) -> BufferRegion {
        BufferRegion {
            name,
            components,
            count,
            data_type,
            normalized,
            offset,
            stride,
        }
    }

    /// Name the region was added under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Components per vector, 1 to 4.
    pub fn components(&self) -> u32 {
        self.components
    }

    /// Number of vectors in the region.
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    /// Whether fixed-point values should be normalized when fetched.
    pub fn normalized(&self) -> bool {
        self.normalized
    }

    /// Byte offset of the region's first vector from the start of the buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Byte distance between consecutive vectors of this region.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Total bytes of the region's own data, independent of packing.
    pub fn size_in_bytes(&self) -> usize {
        self.data_type.size_in_bytes() * self.components as usize * self.count as usize
    }
}

/// Immutable, insertion-ordered collection of uniquely named regions.
#[derive(Clone, Debug, Default)]
pub struct BufferLayout {
    regions: IndexMap<String, BufferRegion>,
    interleaved: bool,
}

impl BufferLayout {
    pub(crate) fn new(
        regions: impl IntoIterator<Item = BufferRegion>,
        interleaved: bool,
    ) -> BufferLayout {
        BufferLayout {
            regions: regions.into_iter().map(|r| (r.name.clone(), r)).collect(),
            interleaved,
        }
    }

    /// Regions in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = &BufferRegion> {
        self.regions.values()
    }

    /// Looks up a region by name.
    pub fn find(&self, name: &str) -> Option<&BufferRegion> {
        self.regions.get(name)
    }

    /// Whether the regions share one interleaved row.
    pub fn interleaved(&self) -> bool {
        self.interleaved
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Total byte size of the fully packed buffer.
    pub fn size_in_bytes(&self) -> usize {
        if self.interleaved {
            // One shared row geometry; every region agrees on stride and count.
            self.iter()
                .next()
                .map(|r| r.stride() * r.count() as usize)
                .unwrap_or(0)
        } else {
            self.iter().map(BufferRegion::size_in_bytes).sum()
        }
    }
}

impl<'a> IntoIterator for &'a BufferLayout {
    type Item = &'a BufferRegion;
    type IntoIter = indexmap::map::Values<'a, String, BufferRegion>;

    fn into_iter(self) -> Self::IntoIter {
        self.regions.values()
    }
}
