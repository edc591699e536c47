//! Image utilities
//! Keeps us from having to use specific bevy types in the physics engine,
//! the shell converts these into textures at the last moment

use bevy::render::{
    render_resource::{Extent3d, TextureDimension, TextureFormat},
    texture::Image,
};

/// Representing a raw RGBA image
/// Game engine agnostic, full ownership, no lifetimes, not a component
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawImage {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u8>,
}

impl RawImage {
    /// Bytes per pixel, RGBA
    pub const CHANNELS: usize = 4;

    /// Gets the rgba value of one pixel, mostly for testing
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let start = (y * self.width + x) * Self::CHANNELS;
        [
            self.pixels[start],
            self.pixels[start + 1],
            self.pixels[start + 2],
            self.pixels[start + 3],
        ]
    }

    /// Describes the size of this image for the render backend
    pub fn extent(&self) -> Extent3d {
        Extent3d {
            width: self.width as u32,
            height: self.height as u32,
            depth_or_array_layers: 1,
        }
    }

    /// Convert to a bevy image
    /// Load this into an asset server to get a texture like the following
    /// ```ignore
    /// let image: RawImage = RawImage::default();
    /// let image_handle: Handle<Image> = images.add(image.to_bevy_image());
    /// ```
    pub fn to_bevy_image(self) -> Image {
        Image::new(
            self.extent(),
            TextureDimension::D2,
            self.pixels,
            TextureFormat::Rgba8UnormSrgb, // Assuming RGBA format
        )
    }
}
