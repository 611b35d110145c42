//! Splicing a replacement JPEG between a template's header and footer

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::analyzer::{BoundaryInfo, Template};
use crate::error::ContainerError;

/// Hook for rewriting header/footer fields after a payload swap.
///
/// The container's metadata is opaque: any length or offset fields it holds
/// still describe the template's original payload after splicing. A patcher
/// receives the assembled container and may correct such fields in place.
pub trait MetadataPatcher {
    /// Patch `container`, whose payload is `payload_len` bytes long and starts
    /// at `boundaries.header_size`.
    fn patch(
        &self,
        boundaries: &BoundaryInfo,
        payload_len: usize,
        container: &mut [u8],
    ) -> Result<(), ContainerError>;
}

/// Leaves header and footer bytes exactly as they were in the template.
#[derive(Debug, Clone, Copy, Default)]
pub struct VerbatimMetadata;

impl MetadataPatcher for VerbatimMetadata {
    fn patch(&self, _: &BoundaryInfo, _: usize, _: &mut [u8]) -> Result<(), ContainerError> {
        Ok(())
    }
}

/// Assemble `template[header] + payload + template[footer]`.
///
/// `payload` may be of any length; only the template's region sizes are fixed.
pub fn splice(
    template: &[u8],
    boundaries: &BoundaryInfo,
    payload: &[u8],
) -> Result<Vec<u8>, ContainerError> {
    if template.len() != boundaries.total_size {
        return Err(ContainerError::TemplateMismatch {
            expected: boundaries.total_size,
            actual: template.len(),
        });
    }

    let mut out =
        Vec::with_capacity(boundaries.header_size + payload.len() + boundaries.footer_size);
    out.extend_from_slice(&template[boundaries.header_range()]);
    out.extend_from_slice(payload);
    if boundaries.footer_size > 0 {
        out.extend_from_slice(&template[boundaries.footer_range()]);
    }

    Ok(out)
}

/// Builds containers from one template, applying a [`MetadataPatcher`].
pub struct Splicer<'a, P = VerbatimMetadata> {
    template: &'a Template,
    patcher: P,
}

impl<'a> Splicer<'a, VerbatimMetadata> {
    pub fn new(template: &'a Template) -> Self {
        Self {
            template,
            patcher: VerbatimMetadata,
        }
    }
}

impl<'a, P: MetadataPatcher> Splicer<'a, P> {
    pub fn with_patcher(template: &'a Template, patcher: P) -> Self {
        Self { template, patcher }
    }

    /// Build a container holding `payload`.
    pub fn build(&self, payload: &[u8]) -> Result<Vec<u8>, ContainerError> {
        let boundaries = self.template.boundaries();
        let mut container = splice(self.template.bytes(), boundaries, payload)?;
        self.patcher.patch(boundaries, payload.len(), &mut container)?;
        Ok(container)
    }

    /// Build a container holding `payload` and write it to `path`.
    ///
    /// Returns the number of bytes written.
    pub fn write_to<Q: AsRef<Path>>(
        &self,
        path: Q,
        payload: &[u8],
    ) -> Result<usize, ContainerError> {
        let container = self.build(payload)?;
        fs::write(path.as_ref(), &container)?;
        debug!(
            "Wrote {} bytes ({} byte payload) to {:?}",
            container.len(),
            payload.len(),
            path.as_ref()
        );
        Ok(container.len())
    }
}
