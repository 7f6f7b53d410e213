//! Card rasterization: drawing passes over a CPU surface, PNG output.

/// Separable Gaussian blur for glow and shadow halos.
pub mod blur;
/// Pass orchestration (`Compositor`).
pub mod compositor;
/// PNG encoding.
pub mod encode;
/// Background gradient descriptors.
pub mod gradient;
/// Border ornaments and emoji.
pub mod ornaments;
/// Background motifs.
pub mod patterns;
/// Frame outlines and small path helpers.
pub mod shapes;
/// Drawing surface trait and the `vello_cpu` implementation.
pub mod surface;
/// Text layout and rasterization through usvg/resvg.
pub mod text;

#[cfg(test)]
pub(crate) mod recording;
