//! Raw `GLenum` values for every recognized pixel format and data type.
//!
//! Names follow the GL headers with the `GL_` prefix dropped, so
//! `GL_UNSIGNED_SHORT_5_6_5` is [`UNSIGNED_SHORT_5_6_5`].

#![allow(missing_docs)]

// ---------------------------------------------------------------------------
// Pixel formats
// ---------------------------------------------------------------------------

pub const COLOR_INDEX: u32 = 0x1900;
pub const STENCIL_INDEX: u32 = 0x1901;
pub const DEPTH_COMPONENT: u32 = 0x1902;
pub const RED: u32 = 0x1903;
pub const GREEN: u32 = 0x1904;
pub const BLUE: u32 = 0x1905;
pub const ALPHA: u32 = 0x1906;
pub const RGB: u32 = 0x1907;
pub const RGBA: u32 = 0x1908;
pub const LUMINANCE: u32 = 0x1909;
pub const LUMINANCE_ALPHA: u32 = 0x190A;

pub const ABGR_EXT: u32 = 0x8000;
pub const CMYK_EXT: u32 = 0x800C;
pub const CMYKA_EXT: u32 = 0x800D;
pub const FORMAT_422_EXT: u32 = 0x80CC;
pub const FORMAT_422_REV_EXT: u32 = 0x80CD;
pub const FORMAT_422_AVERAGE_EXT: u32 = 0x80CE;
pub const FORMAT_422_REV_AVERAGE_EXT: u32 = 0x80CF;
pub const BGR_EXT: u32 = 0x80E0;
pub const BGRA_EXT: u32 = 0x80E1;

pub const YCRCB_422_SGIX: u32 = 0x81BB;
pub const YCRCB_444_SGIX: u32 = 0x81BC;
pub const YCBCR_422_APPLE: u32 = 0x85B9;
pub const YCBCR_MESA: u32 = 0x8757;

pub const DEPTH_STENCIL_NV: u32 = 0x84F9;
pub const HILO_NV: u32 = 0x86F4;
pub const DSDT_NV: u32 = 0x86F5;
pub const DSDT_MAG_NV: u32 = 0x86F6;
pub const DSDT_MAG_VIB_NV: u32 = 0x86F7;

pub const DUDV_ATI: u32 = 0x8779;
pub const DU8DV8_ATI: u32 = 0x877A;

pub const FORMAT_SUBSAMPLE_24_24_OML: u32 = 0x8982;
pub const FORMAT_SUBSAMPLE_244_244_OML: u32 = 0x8983;

pub const RED_INTEGER_EXT: u32 = 0x8D94;
pub const GREEN_INTEGER_EXT: u32 = 0x8D95;
pub const BLUE_INTEGER_EXT: u32 = 0x8D96;
pub const ALPHA_INTEGER_EXT: u32 = 0x8D97;
pub const RGB_INTEGER_EXT: u32 = 0x8D98;
pub const RGBA_INTEGER_EXT: u32 = 0x8D99;
pub const BGR_INTEGER_EXT: u32 = 0x8D9A;
pub const BGRA_INTEGER_EXT: u32 = 0x8D9B;
pub const LUMINANCE_INTEGER_EXT: u32 = 0x8D9C;
pub const LUMINANCE_ALPHA_INTEGER_EXT: u32 = 0x8D9D;

// ---------------------------------------------------------------------------
// Data types
// ---------------------------------------------------------------------------

pub const BYTE: u32 = 0x1400;
pub const UNSIGNED_BYTE: u32 = 0x1401;
pub const SHORT: u32 = 0x1402;
pub const UNSIGNED_SHORT: u32 = 0x1403;
pub const INT: u32 = 0x1404;
pub const UNSIGNED_INT: u32 = 0x1405;
pub const FLOAT: u32 = 0x1406;
pub const HALF_FLOAT_ARB: u32 = 0x140B;
pub const BITMAP: u32 = 0x1A00;

pub const UNSIGNED_BYTE_3_3_2: u32 = 0x8032;
pub const UNSIGNED_BYTE_2_3_3_REV: u32 = 0x8362;

pub const UNSIGNED_SHORT_4_4_4_4: u32 = 0x8033;
pub const UNSIGNED_SHORT_5_5_5_1: u32 = 0x8034;
pub const UNSIGNED_SHORT_5_6_5: u32 = 0x8363;
pub const UNSIGNED_SHORT_5_6_5_REV: u32 = 0x8364;
pub const UNSIGNED_SHORT_4_4_4_4_REV: u32 = 0x8365;
pub const UNSIGNED_SHORT_1_5_5_5_REV: u32 = 0x8366;
pub const UNSIGNED_SHORT_8_8_APPLE: u32 = 0x85BA;
pub const UNSIGNED_SHORT_8_8_REV_APPLE: u32 = 0x85BB;

pub const UNSIGNED_INT_8_8_8_8: u32 = 0x8035;
pub const UNSIGNED_INT_10_10_10_2: u32 = 0x8036;
pub const UNSIGNED_INT_8_8_8_8_REV: u32 = 0x8367;
pub const UNSIGNED_INT_2_10_10_10_REV: u32 = 0x8368;
pub const UNSIGNED_INT_24_8_NV: u32 = 0x84FA;
pub const UNSIGNED_INT_S8_S8_8_8_NV: u32 = 0x86DA;
pub const UNSIGNED_INT_8_8_S8_S8_REV_NV: u32 = 0x86DB;
pub const UNSIGNED_INT_10F_11F_11F_REV_EXT: u32 = 0x8C3B;
pub const UNSIGNED_INT_5_9_9_9_REV_EXT: u32 = 0x8C3E;
pub const FLOAT_32_UNSIGNED_INT_24_8_REV_NV: u32 = 0x8DAD;
