//! Pixel format enumerants and their component counts.

use core::fmt;

use crate::error::SizeError;
use crate::gl;

/// Pixel (or vertex) data format, identified by its `GLenum` value.
///
/// The discriminant is the raw GL value, so `PixelFormat::Rgba as u32`
/// equals [`gl::RGBA`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
#[repr(u32)]
pub enum PixelFormat {
    /// Single color-index value.
    ColorIndex = gl::COLOR_INDEX,
    /// Single stencil index.
    StencilIndex = gl::STENCIL_INDEX,
    /// Single depth value.
    DepthComponent = gl::DEPTH_COMPONENT,
    /// Red channel only.
    Red = gl::RED,
    /// Green channel only.
    Green = gl::GREEN,
    /// Blue channel only.
    Blue = gl::BLUE,
    /// Alpha channel only.
    Alpha = gl::ALPHA,
    /// Red, green, blue.
    Rgb = gl::RGB,
    /// Red, green, blue, alpha.
    Rgba = gl::RGBA,
    /// Single luminance channel.
    Luminance = gl::LUMINANCE,
    /// Luminance + alpha.
    LuminanceAlpha = gl::LUMINANCE_ALPHA,
    /// Alpha, blue, green, red (`EXT_abgr`).
    Abgr = gl::ABGR_EXT,
    /// Cyan, magenta, yellow, black (`EXT_cmyka`).
    Cmyk = gl::CMYK_EXT,
    /// CMYK plus alpha; the only five-component format.
    Cmyka = gl::CMYKA_EXT,
    /// 4:2:2 subsampled pairs (`EXT_422_pixels`).
    Format422 = gl::FORMAT_422_EXT,
    /// 4:2:2 subsampled pairs, reversed order.
    Format422Rev = gl::FORMAT_422_REV_EXT,
    /// 4:2:2 subsampled pairs, averaged chroma.
    Format422Average = gl::FORMAT_422_AVERAGE_EXT,
    /// 4:2:2 subsampled pairs, reversed order, averaged chroma.
    Format422RevAverage = gl::FORMAT_422_REV_AVERAGE_EXT,
    /// Blue, green, red (`EXT_bgra`).
    Bgr = gl::BGR_EXT,
    /// Blue, green, red, alpha (`EXT_bgra`).
    Bgra = gl::BGRA_EXT,
    /// 4:2:2 YCrCb (`SGIX_ycrcb`).
    Ycrcb422Sgix = gl::YCRCB_422_SGIX,
    /// 4:4:4 YCrCb (`SGIX_ycrcb`).
    Ycrcb444Sgix = gl::YCRCB_444_SGIX,
    /// 4:2:2 YCbCr (`APPLE_ycbcr_422`).
    Ycbcr422Apple = gl::YCBCR_422_APPLE,
    /// YCbCr (`MESA_ycbcr_texture`).
    YcbcrMesa = gl::YCBCR_MESA,
    /// Packed depth + stencil (`NV_packed_depth_stencil`).
    DepthStencilNv = gl::DEPTH_STENCIL_NV,
    /// Two-channel HILO (`NV_texture_shader`).
    HiloNv = gl::HILO_NV,
    /// DS/DT offset pair (`NV_texture_shader`).
    DsdtNv = gl::DSDT_NV,
    /// DS/DT offset pair plus magnitude.
    DsdtMagNv = gl::DSDT_MAG_NV,
    /// DS/DT offset pair plus magnitude and vibrance.
    DsdtMagVibNv = gl::DSDT_MAG_VIB_NV,
    /// DU/DV bump-map pair (`ATI_envmap_bumpmap`).
    DudvAti = gl::DUDV_ATI,
    /// 8-bit DU/DV bump-map pair.
    Du8dv8Ati = gl::DU8DV8_ATI,
    /// 24:24 subsampled pairs (`OML_subsample`).
    Subsample2424Oml = gl::FORMAT_SUBSAMPLE_24_24_OML,
    /// 244:244 subsampled triples (`OML_subsample`).
    Subsample244244Oml = gl::FORMAT_SUBSAMPLE_244_244_OML,
    /// Unnormalized integer red (`EXT_texture_integer`).
    RedInteger = gl::RED_INTEGER_EXT,
    /// Unnormalized integer green.
    GreenInteger = gl::GREEN_INTEGER_EXT,
    /// Unnormalized integer blue.
    BlueInteger = gl::BLUE_INTEGER_EXT,
    /// Unnormalized integer alpha.
    AlphaInteger = gl::ALPHA_INTEGER_EXT,
    /// Unnormalized integer red, green, blue.
    RgbInteger = gl::RGB_INTEGER_EXT,
    /// Unnormalized integer red, green, blue, alpha.
    RgbaInteger = gl::RGBA_INTEGER_EXT,
    /// Unnormalized integer blue, green, red.
    BgrInteger = gl::BGR_INTEGER_EXT,
    /// Unnormalized integer blue, green, red, alpha.
    BgraInteger = gl::BGRA_INTEGER_EXT,
    /// Unnormalized integer luminance.
    LuminanceInteger = gl::LUMINANCE_INTEGER_EXT,
    /// Unnormalized integer luminance + alpha.
    LuminanceAlphaInteger = gl::LUMINANCE_ALPHA_INTEGER_EXT,
}

impl PixelFormat {
    /// Every recognized format, in `GLenum` order.
    pub const ALL: [PixelFormat; 43] = [
        Self::ColorIndex,
        Self::StencilIndex,
        Self::DepthComponent,
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Alpha,
        Self::Rgb,
        Self::Rgba,
        Self::Luminance,
        Self::LuminanceAlpha,
        Self::Abgr,
        Self::Cmyk,
        Self::Cmyka,
        Self::Format422,
        Self::Format422Rev,
        Self::Format422Average,
        Self::Format422RevAverage,
        Self::Bgr,
        Self::Bgra,
        Self::Ycrcb422Sgix,
        Self::Ycrcb444Sgix,
        Self::DepthStencilNv,
        Self::Ycbcr422Apple,
        Self::HiloNv,
        Self::DsdtNv,
        Self::DsdtMagNv,
        Self::DsdtMagVibNv,
        Self::YcbcrMesa,
        Self::DudvAti,
        Self::Du8dv8Ati,
        Self::Subsample2424Oml,
        Self::Subsample244244Oml,
        Self::RedInteger,
        Self::GreenInteger,
        Self::BlueInteger,
        Self::AlphaInteger,
        Self::RgbInteger,
        Self::RgbaInteger,
        Self::BgrInteger,
        Self::BgraInteger,
        Self::LuminanceInteger,
        Self::LuminanceAlphaInteger,
    ];

    /// Look up a format by its raw `GLenum`. Returns `None` if unrecognized.
    ///
    /// Legacy component counts (1–4) are not formats; use
    /// [`FormatSpec::from_raw`] to accept those too.
    pub fn from_raw(raw: u32) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| *f as u32 == raw)
    }

    /// Raw `GLenum` value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self as u32
    }

    /// Number of components in one pixel of this format (1 to 5).
    pub const fn components(self) -> u32 {
        match self {
            Self::ColorIndex
            | Self::Red
            | Self::Green
            | Self::Blue
            | Self::Alpha
            | Self::RedInteger
            | Self::GreenInteger
            | Self::BlueInteger
            | Self::AlphaInteger
            | Self::StencilIndex
            | Self::DepthComponent
            | Self::Luminance
            | Self::LuminanceInteger => 1,

            Self::LuminanceAlpha
            | Self::LuminanceAlphaInteger
            | Self::Format422
            | Self::Format422Rev
            | Self::Format422Average
            | Self::Format422RevAverage
            | Self::Ycrcb422Sgix
            | Self::Ycbcr422Apple
            | Self::YcbcrMesa
            | Self::DepthStencilNv
            | Self::HiloNv
            | Self::DsdtNv
            | Self::DudvAti
            | Self::Du8dv8Ati
            | Self::Subsample2424Oml => 2,

            Self::Rgb
            | Self::RgbInteger
            | Self::Bgr
            | Self::BgrInteger
            | Self::Ycrcb444Sgix
            | Self::DsdtMagNv
            | Self::Subsample244244Oml => 3,

            Self::Rgba
            | Self::RgbaInteger
            | Self::Bgra
            | Self::BgraInteger
            | Self::Abgr
            | Self::Cmyk
            | Self::DsdtMagVibNv => 4,

            Self::Cmyka => 5,
        }
    }

    /// GL header name, e.g. `"GL_RGBA"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ColorIndex => "GL_COLOR_INDEX",
            Self::StencilIndex => "GL_STENCIL_INDEX",
            Self::DepthComponent => "GL_DEPTH_COMPONENT",
            Self::Red => "GL_RED",
            Self::Green => "GL_GREEN",
            Self::Blue => "GL_BLUE",
            Self::Alpha => "GL_ALPHA",
            Self::Rgb => "GL_RGB",
            Self::Rgba => "GL_RGBA",
            Self::Luminance => "GL_LUMINANCE",
            Self::LuminanceAlpha => "GL_LUMINANCE_ALPHA",
            Self::Abgr => "GL_ABGR_EXT",
            Self::Cmyk => "GL_CMYK_EXT",
            Self::Cmyka => "GL_CMYKA_EXT",
            Self::Format422 => "GL_422_EXT",
            Self::Format422Rev => "GL_422_REV_EXT",
            Self::Format422Average => "GL_422_AVERAGE_EXT",
            Self::Format422RevAverage => "GL_422_REV_AVERAGE_EXT",
            Self::Bgr => "GL_BGR_EXT",
            Self::Bgra => "GL_BGRA_EXT",
            Self::Ycrcb422Sgix => "GL_YCRCB_422_SGIX",
            Self::Ycrcb444Sgix => "GL_YCRCB_444_SGIX",
            Self::Ycbcr422Apple => "GL_YCBCR_422_APPLE",
            Self::YcbcrMesa => "GL_YCBCR_MESA",
            Self::DepthStencilNv => "GL_DEPTH_STENCIL_NV",
            Self::HiloNv => "GL_HILO_NV",
            Self::DsdtNv => "GL_DSDT_NV",
            Self::DsdtMagNv => "GL_DSDT_MAG_NV",
            Self::DsdtMagVibNv => "GL_DSDT_MAG_VIB_NV",
            Self::DudvAti => "GL_DUDV_ATI",
            Self::Du8dv8Ati => "GL_DU8DV8_ATI",
            Self::Subsample2424Oml => "GL_FORMAT_SUBSAMPLE_24_24_OML",
            Self::Subsample244244Oml => "GL_FORMAT_SUBSAMPLE_244_244_OML",
            Self::RedInteger => "GL_RED_INTEGER_EXT",
            Self::GreenInteger => "GL_GREEN_INTEGER_EXT",
            Self::BlueInteger => "GL_BLUE_INTEGER_EXT",
            Self::AlphaInteger => "GL_ALPHA_INTEGER_EXT",
            Self::RgbInteger => "GL_RGB_INTEGER_EXT",
            Self::RgbaInteger => "GL_RGBA_INTEGER_EXT",
            Self::BgrInteger => "GL_BGR_INTEGER_EXT",
            Self::BgraInteger => "GL_BGRA_INTEGER_EXT",
            Self::LuminanceInteger => "GL_LUMINANCE_INTEGER_EXT",
            Self::LuminanceAlphaInteger => "GL_LUMINANCE_ALPHA_INTEGER_EXT",
        }
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A bare component count passed in place of a format enum.
///
/// Only 1 to 4 are valid; the field is private so no other value can be
/// built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LegacyCount(u8);

impl LegacyCount {
    /// Wrap `n` if it is in 1–4.
    pub const fn new(n: u8) -> Option<Self> {
        match n {
            1..=4 => Some(Self(n)),
            _ => None,
        }
    }

    /// The component count.
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for LegacyCount {
    type Error = SizeError;

    fn try_from(n: u8) -> Result<Self, SizeError> {
        Self::new(n).ok_or(SizeError::UnknownFormat(n as u32))
    }
}

/// A format argument as accepted by GL pixel calls.
///
/// Old GL allowed passing the component count (1–4) directly instead of a
/// format enum. That convention is obsolete but still accepted here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum FormatSpec {
    /// A recognized format enum.
    Named(PixelFormat),
    /// A bare component count.
    Components(LegacyCount),
}

impl FormatSpec {
    /// Resolve a raw format argument.
    ///
    /// # Errors
    ///
    /// [`SizeError::UnknownFormat`] if `raw` is neither a recognized format
    /// nor in 1–4.
    pub fn from_raw(raw: u32) -> Result<Self, SizeError> {
        if let Ok(n) = u8::try_from(raw)
            && let Some(count) = LegacyCount::new(n)
        {
            return Ok(Self::Components(count));
        }
        match PixelFormat::from_raw(raw) {
            Some(format) => Ok(Self::Named(format)),
            None => {
                log::debug!("rejecting unknown GL format enum {raw} ({raw:#06x})");
                Err(SizeError::UnknownFormat(raw))
            }
        }
    }

    /// Number of components per pixel.
    #[inline]
    pub const fn components(self) -> u32 {
        match self {
            Self::Named(format) => format.components(),
            Self::Components(n) => n.get() as u32,
        }
    }

    /// Raw value as it would be passed to GL.
    #[inline]
    pub const fn raw(self) -> u32 {
        match self {
            Self::Named(format) => format.raw(),
            Self::Components(n) => n.get() as u32,
        }
    }
}

impl From<PixelFormat> for FormatSpec {
    fn from(format: PixelFormat) -> Self {
        Self::Named(format)
    }
}

impl From<LegacyCount> for FormatSpec {
    fn from(count: LegacyCount) -> Self {
        Self::Components(count)
    }
}

impl fmt::Display for FormatSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(format) => fmt::Display::fmt(format, f),
            Self::Components(n) => write!(f, "{} components", n.get()),
        }
    }
}
