// THIS FILE IS AUTOGENERATED.
// Any changes to this file will be overwritten.
// For more information about how codegen works, see psnames-codegen/README.md

/// Standard glyph names, each followed by a NUL byte.
///
/// The Macintosh names that are not standard strings come first,
/// followed by the standard strings in SID order.
#[rustfmt::skip]
pub static STANDARD_GLYPH_NAMES: [u8; 3696] = [
    0x2E, 0x6E, 0x75, 0x6C, 0x6C, 0x00, 0x6E, 0x6F, 0x6E, 0x6D, 0x61, 0x72, 0x6B, 0x69, 0x6E, 0x67,
    0x72, 0x65, 0x74, 0x75, 0x72, 0x6E, 0x00, 0x6E, 0x6F, 0x74, 0x65, 0x71, 0x75, 0x61, 0x6C, 0x00,
    0x69, 0x6E, 0x66, 0x69, 0x6E, 0x69, 0x74, 0x79, 0x00, 0x6C, 0x65, 0x73, 0x73, 0x65, 0x71, 0x75,
    0x61, 0x6C, 0x00, 0x67, 0x72, 0x65, 0x61, 0x74, 0x65, 0x72, 0x65, 0x71, 0x75, 0x61, 0x6C, 0x00,
    0x70, 0x61, 0x72, 0x74, 0x69, 0x61, 0x6C, 0x64, 0x69, 0x66, 0x66, 0x00, 0x73, 0x75, 0x6D, 0x6D,
    0x61, 0x74, 0x69, 0x6F, 0x6E, 0x00, 0x70, 0x72, 0x6F, 0x64, 0x75, 0x63, 0x74, 0x00, 0x70, 0x69,
    0x00, 0x69, 0x6E, 0x74, 0x65, 0x67, 0x72, 0x61, 0x6C, 0x00, 0x4F, 0x6D, 0x65, 0x67, 0x61, 0x00,
    0x72, 0x61, 0x64, 0x69, 0x63, 0x61, 0x6C, 0x00, 0x61, 0x70, 0x70, 0x72, 0x6F, 0x78, 0x65, 0x71,
    0x75, 0x61, 0x6C, 0x00, 0x44, 0x65, 0x6C, 0x74, 0x61, 0x00, 0x6E, 0x6F, 0x6E, 0x62, 0x72, 0x65,
    0x61, 0x6B, 0x69, 0x6E, 0x67, 0x73, 0x70, 0x61, 0x63, 0x65, 0x00, 0x6C, 0x6F, 0x7A, 0x65, 0x6E,
    0x67, 0x65, 0x00, 0x61, 0x70, 0x70, 0x6C, 0x65, 0x00, 0x66, 0x72, 0x61, 0x6E, 0x63, 0x00, 0x47,
    0x62, 0x72, 0x65, 0x76, 0x65, 0x00, 0x67, 0x62, 0x72, 0x65, 0x76, 0x65, 0x00, 0x49, 0x64, 0x6F,
    0x74, 0x61, 0x63, 0x63, 0x65, 0x6E, 0x74, 0x00, 0x53, 0x63, 0x65, 0x64, 0x69, 0x6C, 0x6C, 0x61,
    0x00, 0x73, 0x63, 0x65, 0x64, 0x69, 0x6C, 0x6C, 0x61, 0x00, 0x43, 0x61, 0x63, 0x75, 0x74, 0x65,
    0x00, 0x63, 0x61, 0x63, 0x75, 0x74, 0x65, 0x00, 0x43, 0x63, 0x61, 0x72, 0x6F, 0x6E, 0x00, 0x63,
    0x63, 0x61, 0x72, 0x6F, 0x6E, 0x00, 0x64, 0x63, 0x72, 0x6F, 0x61, 0x74, 0x00, 0x2E, 0x6E, 0x6F,
    0x74, 0x64, 0x65, 0x66, 0x00, 0x73, 0x70, 0x61, 0x63, 0x65, 0x00, 0x65, 0x78, 0x63, 0x6C, 0x61,
    0x6D, 0x00, 0x71, 0x75, 0x6F, 0x74, 0x65, 0x64, 0x62, 0x6C, 0x00, 0x6E, 0x75, 0x6D, 0x62, 0x65,
    0x72, 0x73, 0x69, 0x67, 0x6E, 0x00, 0x64, 0x6F, 0x6C, 0x6C, 0x61, 0x72, 0x00, 0x70, 0x65, 0x72,
    0x63, 0x65, 0x6E, 0x74, 0x00, 0x61, 0x6D, 0x70, 0x65, 0x72, 0x73, 0x61, 0x6E, 0x64, 0x00, 0x71,
    0x75, 0x6F, 0x74, 0x65, 0x72, 0x69, 0x67, 0x68, 0x74, 0x00, 0x70, 0x61, 0x72, 0x65, 0x6E, 0x6C,
    0x65, 0x66, 0x74, 0x00, 0x70, 0x61, 0x72, 0x65, 0x6E, 0x72, 0x69, 0x67, 0x68, 0x74, 0x00, 0x61,
    0x73, 0x74, 0x65, 0x72, 0x69, 0x73, 0x6B, 0x00, 0x70, 0x6C, 0x75, 0x73, 0x00, 0x63, 0x6F, 0x6D,
    0x6D, 0x61, 0x00, 0x68, 0x79, 0x70, 0x68, 0x65, 0x6E, 0x00, 0x70, 0x65, 0x72, 0x69, 0x6F, 0x64,
    0x00, 0x73, 0x6C, 0x61, 0x73, 0x68, 0x00, 0x7A, 0x65, 0x72, 0x6F, 0x00, 0x6F, 0x6E, 0x65, 0x00,
    0x74, 0x77, 0x6F, 0x00, 0x74, 0x68, 0x72, 0x65, 0x65, 0x00, 0x66, 0x6F, 0x75, 0x72, 0x00, 0x66,
    0x69, 0x76, 0x65, 0x00, 0x73, 0x69, 0x78, 0x00, 0x73, 0x65, 0x76, 0x65, 0x6E, 0x00, 0x65, 0x69,
    0x67, 0x68, 0x74, 0x00, 0x6E, 0x69, 0x6E, 0x65, 0x00, 0x63, 0x6F, 0x6C, 0x6F, 0x6E, 0x00, 0x73,
    0x65, 0x6D, 0x69, 0x63, 0x6F, 0x6C, 0x6F, 0x6E, 0x00, 0x6C, 0x65, 0x73, 0x73, 0x00, 0x65, 0x71,
    0x75, 0x61, 0x6C, 0x00, 0x67, 0x72, 0x65, 0x61, 0x74, 0x65, 0x72, 0x00, 0x71, 0x75, 0x65, 0x73,
    0x74, 0x69, 0x6F, 0x6E, 0x00, 0x61, 0x74, 0x00, 0x41, 0x00, 0x42, 0x00, 0x43, 0x00, 0x44, 0x00,
    0x45, 0x00, 0x46, 0x00, 0x47, 0x00, 0x48, 0x00, 0x49, 0x00, 0x4A, 0x00, 0x4B, 0x00, 0x4C, 0x00,
    0x4D, 0x00, 0x4E, 0x00, 0x4F, 0x00, 0x50, 0x00, 0x51, 0x00, 0x52, 0x00, 0x53, 0x00, 0x54, 0x00,
    0x55, 0x00, 0x56, 0x00, 0x57, 0x00, 0x58, 0x00, 0x59, 0x00, 0x5A, 0x00, 0x62, 0x72, 0x61, 0x63,
    0x6B, 0x65, 0x74, 0x6C, 0x65, 0x66, 0x74, 0x00, 0x62, 0x61, 0x63, 0x6B, 0x73, 0x6C, 0x61, 0x73,
    0x68, 0x00, 0x62, 0x72, 0x61, 0x63, 0x6B, 0x65, 0x74, 0x72, 0x69, 0x67, 0x68, 0x74, 0x00, 0x61,
    0x73, 0x63, 0x69, 0x69, 0x63, 0x69, 0x72, 0x63, 0x75, 0x6D, 0x00, 0x75, 0x6E, 0x64, 0x65, 0x72,
    0x73, 0x63, 0x6F, 0x72, 0x65, 0x00, 0x71, 0x75, 0x6F, 0x74, 0x65, 0x6C, 0x65, 0x66, 0x74, 0x00,
    0x61, 0x00, 0x62, 0x00, 0x63, 0x00, 0x64, 0x00, 0x65, 0x00, 0x66, 0x00, 0x67, 0x00, 0x68, 0x00,
    0x69, 0x00, 0x6A, 0x00, 0x6B, 0x00, 0x6C, 0x00, 0x6D, 0x00, 0x6E, 0x00, 0x6F, 0x00, 0x70, 0x00,
    0x71, 0x00, 0x72, 0x00, 0x73, 0x00, 0x74, 0x00, 0x75, 0x00, 0x76, 0x00, 0x77, 0x00, 0x78, 0x00,
    0x79, 0x00, 0x7A, 0x00, 0x62, 0x72, 0x61, 0x63, 0x65, 0x6C, 0x65, 0x66, 0x74, 0x00, 0x62, 0x61,
    0x72, 0x00, 0x62, 0x72, 0x61, 0x63, 0x65, 0x72, 0x69, 0x67, 0x68, 0x74, 0x00, 0x61, 0x73, 0x63,
    0x69, 0x69, 0x74, 0x69, 0x6C, 0x64, 0x65, 0x00, 0x65, 0x78, 0x63, 0x6C, 0x61, 0x6D, 0x64, 0x6F,
    0x77, 0x6E, 0x00, 0x63, 0x65, 0x6E, 0x74, 0x00, 0x73, 0x74, 0x65, 0x72, 0x6C, 0x69, 0x6E, 0x67,
    0x00, 0x66, 0x72, 0x61, 0x63, 0x74, 0x69, 0x6F, 0x6E, 0x00, 0x79, 0x65, 0x6E, 0x00, 0x66, 0x6C,
    0x6F, 0x72, 0x69, 0x6E, 0x00, 0x73, 0x65, 0x63, 0x74, 0x69, 0x6F, 0x6E, 0x00, 0x63, 0x75, 0x72,
    0x72, 0x65, 0x6E, 0x63, 0x79, 0x00, 0x71, 0x75, 0x6F, 0x74, 0x65, 0x73, 0x69, 0x6E, 0x67, 0x6C,
    0x65, 0x00, 0x71, 0x75, 0x6F, 0x74, 0x65, 0x64, 0x62, 0x6C, 0x6C, 0x65, 0x66, 0x74, 0x00, 0x67,
    0x75, 0x69, 0x6C, 0x6C, 0x65, 0x6D, 0x6F, 0x74, 0x6C, 0x65, 0x66, 0x74, 0x00, 0x67, 0x75, 0x69,
    0x6C, 0x73, 0x69, 0x6E, 0x67, 0x6C, 0x6C, 0x65, 0x66, 0x74, 0x00, 0x67, 0x75, 0x69, 0x6C, 0x73,
    0x69, 0x6E, 0x67, 0x6C, 0x72, 0x69, 0x67, 0x68, 0x74, 0x00, 0x66, 0x69, 0x00, 0x66, 0x6C, 0x00,
    0x65, 0x6E, 0x64, 0x61, 0x73, 0x68, 0x00, 0x64, 0x61, 0x67, 0x67, 0x65, 0x72, 0x00, 0x64, 0x61,
    0x67, 0x67, 0x65, 0x72, 0x64, 0x62, 0x6C, 0x00, 0x70, 0x65, 0x72, 0x69, 0x6F, 0x64, 0x63, 0x65,
    0x6E, 0x74, 0x65, 0x72, 0x65, 0x64, 0x00, 0x70, 0x61, 0x72, 0x61, 0x67, 0x72, 0x61, 0x70, 0x68,
    0x00, 0x62, 0x75, 0x6C, 0x6C, 0x65, 0x74, 0x00, 0x71, 0x75, 0x6F, 0x74, 0x65, 0x73, 0x69, 0x6E,
    0x67, 0x6C, 0x62, 0x61, 0x73, 0x65, 0x00, 0x71, 0x75, 0x6F, 0x74, 0x65, 0x64, 0x62, 0x6C, 0x62,
    0x61, 0x73, 0x65, 0x00, 0x71, 0x75, 0x6F, 0x74, 0x65, 0x64, 0x62, 0x6C, 0x72, 0x69, 0x67, 0x68,
    0x74, 0x00, 0x67, 0x75, 0x69, 0x6C, 0x6C, 0x65, 0x6D, 0x6F, 0x74, 0x72, 0x69, 0x67, 0x68, 0x74,
    0x00, 0x65, 0x6C, 0x6C, 0x69, 0x70, 0x73, 0x69, 0x73, 0x00, 0x70, 0x65, 0x72, 0x74, 0x68, 0x6F,
    0x75, 0x73, 0x61, 0x6E, 0x64, 0x00, 0x71, 0x75, 0x65, 0x73, 0x74, 0x69, 0x6F, 0x6E, 0x64, 0x6F,
    0x77, 0x6E, 0x00, 0x67, 0x72, 0x61, 0x76, 0x65, 0x00, 0x61, 0x63, 0x75, 0x74, 0x65, 0x00, 0x63,
    0x69, 0x72, 0x63, 0x75, 0x6D, 0x66, 0x6C, 0x65, 0x78, 0x00, 0x74, 0x69, 0x6C, 0x64, 0x65, 0x00,
    0x6D, 0x61, 0x63, 0x72, 0x6F, 0x6E, 0x00, 0x62, 0x72, 0x65, 0x76, 0x65, 0x00, 0x64, 0x6F, 0x74,
    0x61, 0x63, 0x63, 0x65, 0x6E, 0x74, 0x00, 0x64, 0x69, 0x65, 0x72, 0x65, 0x73, 0x69, 0x73, 0x00,
    0x72, 0x69, 0x6E, 0x67, 0x00, 0x63, 0x65, 0x64, 0x69, 0x6C, 0x6C, 0x61, 0x00, 0x68, 0x75, 0x6E,
    0x67, 0x61, 0x72, 0x75, 0x6D, 0x6C, 0x61, 0x75, 0x74, 0x00, 0x6F, 0x67, 0x6F, 0x6E, 0x65, 0x6B,
    0x00, 0x63, 0x61, 0x72, 0x6F, 0x6E, 0x00, 0x65, 0x6D, 0x64, 0x61, 0x73, 0x68, 0x00, 0x41, 0x45,
    0x00, 0x6F, 0x72, 0x64, 0x66, 0x65, 0x6D, 0x69, 0x6E, 0x69, 0x6E, 0x65, 0x00, 0x4C, 0x73, 0x6C,
    0x61, 0x73, 0x68, 0x00, 0x4F, 0x73, 0x6C, 0x61, 0x73, 0x68, 0x00, 0x4F, 0x45, 0x00, 0x6F, 0x72,
    0x64, 0x6D, 0x61, 0x73, 0x63, 0x75, 0x6C, 0x69, 0x6E, 0x65, 0x00, 0x61, 0x65, 0x00, 0x64, 0x6F,
    0x74, 0x6C, 0x65, 0x73, 0x73, 0x69, 0x00, 0x6C, 0x73, 0x6C, 0x61, 0x73, 0x68, 0x00, 0x6F, 0x73,
    0x6C, 0x61, 0x73, 0x68, 0x00, 0x6F, 0x65, 0x00, 0x67, 0x65, 0x72, 0x6D, 0x61, 0x6E, 0x64, 0x62,
    0x6C, 0x73, 0x00, 0x6F, 0x6E, 0x65, 0x73, 0x75, 0x70, 0x65, 0x72, 0x69, 0x6F, 0x72, 0x00, 0x6C,
    0x6F, 0x67, 0x69, 0x63, 0x61, 0x6C, 0x6E, 0x6F, 0x74, 0x00, 0x6D, 0x75, 0x00, 0x74, 0x72, 0x61,
    0x64, 0x65, 0x6D, 0x61, 0x72, 0x6B, 0x00, 0x45, 0x74, 0x68, 0x00, 0x6F, 0x6E, 0x65, 0x68, 0x61,
    0x6C, 0x66, 0x00, 0x70, 0x6C, 0x75, 0x73, 0x6D, 0x69, 0x6E, 0x75, 0x73, 0x00, 0x54, 0x68, 0x6F,
    0x72, 0x6E, 0x00, 0x6F, 0x6E, 0x65, 0x71, 0x75, 0x61, 0x72, 0x74, 0x65, 0x72, 0x00, 0x64, 0x69,
    0x76, 0x69, 0x64, 0x65, 0x00, 0x62, 0x72, 0x6F, 0x6B, 0x65, 0x6E, 0x62, 0x61, 0x72, 0x00, 0x64,
    0x65, 0x67, 0x72, 0x65, 0x65, 0x00, 0x74, 0x68, 0x6F, 0x72, 0x6E, 0x00, 0x74, 0x68, 0x72, 0x65,
    0x65, 0x71, 0x75, 0x61, 0x72, 0x74, 0x65, 0x72, 0x73, 0x00, 0x74, 0x77, 0x6F, 0x73, 0x75, 0x70,
    0x65, 0x72, 0x69, 0x6F, 0x72, 0x00, 0x72, 0x65, 0x67, 0x69, 0x73, 0x74, 0x65, 0x72, 0x65, 0x64,
    0x00, 0x6D, 0x69, 0x6E, 0x75, 0x73, 0x00, 0x65, 0x74, 0x68, 0x00, 0x6D, 0x75, 0x6C, 0x74, 0x69,
    0x70, 0x6C, 0x79, 0x00, 0x74, 0x68, 0x72, 0x65, 0x65, 0x73, 0x75, 0x70, 0x65, 0x72, 0x69, 0x6F,
    0x72, 0x00, 0x63, 0x6F, 0x70, 0x79, 0x72, 0x69, 0x67, 0x68, 0x74, 0x00, 0x41, 0x61, 0x63, 0x75,
    0x74, 0x65, 0x00, 0x41, 0x63, 0x69, 0x72, 0x63, 0x75, 0x6D, 0x66, 0x6C, 0x65, 0x78, 0x00, 0x41,
    0x64, 0x69, 0x65, 0x72, 0x65, 0x73, 0x69, 0x73, 0x00, 0x41, 0x67, 0x72, 0x61, 0x76, 0x65, 0x00,
    0x41, 0x72, 0x69, 0x6E, 0x67, 0x00, 0x41, 0x74, 0x69, 0x6C, 0x64, 0x65, 0x00, 0x43, 0x63, 0x65,
    0x64, 0x69, 0x6C, 0x6C, 0x61, 0x00, 0x45, 0x61, 0x63, 0x75, 0x74, 0x65, 0x00, 0x45, 0x63, 0x69,
    0x72, 0x63, 0x75, 0x6D, 0x66, 0x6C, 0x65, 0x78, 0x00, 0x45, 0x64, 0x69, 0x65, 0x72, 0x65, 0x73,
    0x69, 0x73, 0x00, 0x45, 0x67, 0x72, 0x61, 0x76, 0x65, 0x00, 0x49, 0x61, 0x63, 0x75, 0x74, 0x65,
    0x00, 0x49, 0x63, 0x69, 0x72, 0x63, 0x75, 0x6D, 0x66, 0x6C, 0x65, 0x78, 0x00, 0x49, 0x64, 0x69,
    0x65, 0x72, 0x65, 0x73, 0x69, 0x73, 0x00, 0x49, 0x67, 0x72, 0x61, 0x76, 0x65, 0x00, 0x4E, 0x74,
    0x69, 0x6C, 0x64, 0x65, 0x00, 0x4F, 0x61, 0x63, 0x75, 0x74, 0x65, 0x00, 0x4F, 0x63, 0x69, 0x72,
    0x63, 0x75, 0x6D, 0x66, 0x6C, 0x65, 0x78, 0x00, 0x4F, 0x64, 0x69, 0x65, 0x72, 0x65, 0x73, 0x69,
    0x73, 0x00, 0x4F, 0x67, 0x72, 0x61, 0x76, 0x65, 0x00, 0x4F, 0x74, 0x69, 0x6C, 0x64, 0x65, 0x00,
    0x53, 0x63, 0x61, 0x72, 0x6F, 0x6E, 0x00, 0x55, 0x61, 0x63, 0x75, 0x74, 0x65, 0x00, 0x55, 0x63,
    0x69, 0x72, 0x63, 0x75, 0x6D, 0x66, 0x6C, 0x65, 0x78, 0x00, 0x55, 0x64, 0x69, 0x65, 0x72, 0x65,
    0x73, 0x69, 0x73, 0x00, 0x55, 0x67, 0x72, 0x61, 0x76, 0x65, 0x00, 0x59, 0x61, 0x63, 0x75, 0x74,
    0x65, 0x00, 0x59, 0x64, 0x69, 0x65, 0x72, 0x65, 0x73, 0x69, 0x73, 0x00, 0x5A, 0x63, 0x61, 0x72,
    0x6F, 0x6E, 0x00, 0x61, 0x61, 0x63, 0x75, 0x74, 0x65, 0x00, 0x61, 0x63, 0x69, 0x72, 0x63, 0x75,
    0x6D, 0x66, 0x6C, 0x65, 0x78, 0x00, 0x61, 0x64, 0x69, 0x65, 0x72, 0x65, 0x73, 0x69, 0x73, 0x00,
    0x61, 0x67, 0x72, 0x61, 0x76, 0x65, 0x00, 0x61, 0x72, 0x69, 0x6E, 0x67, 0x00, 0x61, 0x74, 0x69,
    0x6C, 0x64, 0x65, 0x00, 0x63, 0x63, 0x65, 0x64, 0x69, 0x6C, 0x6C, 0x61, 0x00, 0x65, 0x61, 0x63,
    0x75, 0x74, 0x65, 0x00, 0x65, 0x63, 0x69, 0x72, 0x63, 0x75, 0x6D, 0x66, 0x6C, 0x65, 0x78, 0x00,
    0x65, 0x64, 0x69, 0x65, 0x72, 0x65, 0x73, 0x69, 0x73, 0x00, 0x65, 0x67, 0x72, 0x61, 0x76, 0x65,
    0x00, 0x69, 0x61, 0x63, 0x75, 0x74, 0x65, 0x00, 0x69, 0x63, 0x69, 0x72, 0x63, 0x75, 0x6D, 0x66,
    0x6C, 0x65, 0x78, 0x00, 0x69, 0x64, 0x69, 0x65, 0x72, 0x65, 0x73, 0x69, 0x73, 0x00, 0x69, 0x67,
    0x72, 0x61, 0x76, 0x65, 0x00, 0x6E, 0x74, 0x69, 0x6C, 0x64, 0x65, 0x00, 0x6F, 0x61, 0x63, 0x75,
    0x74, 0x65, 0x00, 0x6F, 0x63, 0x69, 0x72, 0x63, 0x75, 0x6D, 0x66, 0x6C, 0x65, 0x78, 0x00, 0x6F,
    0x64, 0x69, 0x65, 0x72, 0x65, 0x73, 0x69, 0x73, 0x00, 0x6F, 0x67, 0x72, 0x61, 0x76, 0x65, 0x00,
    0x6F, 0x74, 0x69, 0x6C, 0x64, 0x65, 0x00, 0x73, 0x63, 0x61, 0x72, 0x6F, 0x6E, 0x00, 0x75, 0x61,
    0x63, 0x75, 0x74, 0x65, 0x00, 0x75, 0x63, 0x69, 0x72, 0x63, 0x75, 0x6D, 0x66, 0x6C, 0x65, 0x78,
    0x00, 0x75, 0x64, 0x69, 0x65, 0x72, 0x65, 0x73, 0x69, 0x73, 0x00, 0x75, 0x67, 0x72, 0x61, 0x76,
    0x65, 0x00, 0x79, 0x61, 0x63, 0x75, 0x74, 0x65, 0x00, 0x79, 0x64, 0x69, 0x65, 0x72, 0x65, 0x73,
    0x69, 0x73, 0x00, 0x7A, 0x63, 0x61, 0x72, 0x6F, 0x6E, 0x00, 0x65, 0x78, 0x63, 0x6C, 0x61, 0x6D,
    0x73, 0x6D, 0x61, 0x6C, 0x6C, 0x00, 0x48, 0x75, 0x6E, 0x67, 0x61, 0x72, 0x75, 0x6D, 0x6C, 0x61,
    0x75, 0x74, 0x73, 0x6D, 0x61, 0x6C, 0x6C, 0x00, 0x64, 0x6F, 0x6C, 0x6C, 0x61, 0x72, 0x6F, 0x6C,
    0x64, 0x73, 0x74, 0x79, 0x6C, 0x65, 0x00, 0x64, 0x6F, 0x6C, 0x6C, 0x61, 0x72, 0x73, 0x75, 0x70,
    0x65, 0x72, 0x69, 0x6F, 0x72, 0x00, 0x61, 0x6D, 0x70, 0x65, 0x72, 0x73, 0x61, 0x6E, 0x64, 0x73,
    0x6D, 0x61, 0x6C, 0x6C, 0x00, 0x41, 0x63, 0x75, 0x74, 0x65, 0x73, 0x6D, 0x61, 0x6C, 0x6C, 0x00,
    0x70, 0x61, 0x72, 0x65, 0x6E, 0x6C, 0x65, 0x66, 0x74, 0x73, 0x75, 0x70, 0x65, 0x72, 0x69, 0x6F,
    0x72, 0x00, 0x70, 0x61, 0x72, 0x65, 0x6E, 0x72, 0x69, 0x67, 0x68, 0x74, 0x73, 0x75, 0x70, 0x65,
    0x72, 0x69, 0x6F, 0x72, 0x00, 0x74, 0x77, 0x6F, 0x64, 0x6F, 0x74, 0x65, 0x6E, 0x6C, 0x65, 0x61,
    0x64, 0x65, 0x72, 0x00, 0x6F, 0x6E, 0x65, 0x64, 0x6F, 0x74, 0x65, 0x6E, 0x6C, 0x65, 0x61, 0x64,
    0x65, 0x72, 0x00, 0x7A, 0x65, 0x72, 0x6F, 0x6F, 0x6C, 0x64, 0x73, 0x74, 0x79, 0x6C, 0x65, 0x00,
    0x6F, 0x6E, 0x65, 0x6F, 0x6C, 0x64, 0x73, 0x74, 0x79, 0x6C, 0x65, 0x00, 0x74, 0x77, 0x6F, 0x6F,
    0x6C, 0x64, 0x73, 0x74, 0x79, 0x6C, 0x65, 0x00, 0x74, 0x68, 0x72, 0x65, 0x65, 0x6F, 0x6C, 0x64,
    0x73, 0x74, 0x79, 0x6C, 0x65, 0x00, 0x66, 0x6F, 0x75, 0x72, 0x6F, 0x6C, 0x64, 0x73, 0x74, 0x79,
    0x6C, 0x65, 0x00, 0x66, 0x69, 0x76, 0x65, 0x6F, 0x6C, 0x64, 0x73, 0x74, 0x79, 0x6C, 0x65, 0x00,
    0x73, 0x69, 0x78, 0x6F, 0x6C, 0x64, 0x73, 0x74, 0x79, 0x6C, 0x65, 0x00, 0x73, 0x65, 0x76, 0x65,
    0x6E, 0x6F, 0x6C, 0x64, 0x73, 0x74, 0x79, 0x6C, 0x65, 0x00, 0x65, 0x69, 0x67, 0x68, 0x74, 0x6F,
    0x6C, 0x64, 0x73, 0x74, 0x79, 0x6C, 0x65, 0x00, 0x6E, 0x69, 0x6E, 0x65, 0x6F, 0x6C, 0x64, 0x73,
    0x74, 0x79, 0x6C, 0x65, 0x00, 0x63, 0x6F, 0x6D, 0x6D, 0x61, 0x73, 0x75, 0x70, 0x65, 0x72, 0x69,
    0x6F, 0x72, 0x00, 0x74, 0x68, 0x72, 0x65, 0x65, 0x71, 0x75, 0x61, 0x72, 0x74, 0x65, 0x72, 0x73,
    0x65, 0x6D, 0x64, 0x61, 0x73, 0x68, 0x00, 0x70, 0x65, 0x72, 0x69, 0x6F, 0x64, 0x73, 0x75, 0x70,
    0x65, 0x72, 0x69, 0x6F, 0x72, 0x00, 0x71, 0x75, 0x65, 0x73, 0x74, 0x69, 0x6F, 0x6E, 0x73, 0x6D,
    0x61, 0x6C, 0x6C, 0x00, 0x61, 0x73, 0x75, 0x70, 0x65, 0x72, 0x69, 0x6F, 0x72, 0x00, 0x62, 0x73,
    0x75, 0x70, 0x65, 0x72, 0x69, 0x6F, 0x72, 0x00, 0x63, 0x65, 0x6E, 0x74, 0x73, 0x75, 0x70, 0x65,
    0x72, 0x69, 0x6F, 0x72, 0x00, 0x64, 0x73, 0x75, 0x70, 0x65, 0x72, 0x69, 0x6F, 0x72, 0x00, 0x65,
    0x73, 0x75, 0x70, 0x65, 0x72, 0x69, 0x6F, 0x72, 0x00, 0x69, 0x73, 0x75, 0x70, 0x65, 0x72, 0x69,
    0x6F, 0x72, 0x00, 0x6C, 0x73, 0x75, 0x70, 0x65, 0x72, 0x69, 0x6F, 0x72, 0x00, 0x6D, 0x73, 0x75,
    0x70, 0x65, 0x72, 0x69, 0x6F, 0x72, 0x00, 0x6E, 0x73, 0x75, 0x70, 0x65, 0x72, 0x69, 0x6F, 0x72,
    0x00, 0x6F, 0x73, 0x75, 0x70, 0x65, 0x72, 0x69, 0x6F, 0x72, 0x00, 0x72, 0x73, 0x75, 0x70, 0x65,
    0x72, 0x69, 0x6F, 0x72, 0x00, 0x73, 0x73, 0x75, 0x70, 0x65, 0x72, 0x69, 0x6F, 0x72, 0x00, 0x74,
    0x73, 0x75, 0x70, 0x65, 0x72, 0x69, 0x6F, 0x72, 0x00, 0x66, 0x66, 0x00, 0x66, 0x66, 0x69, 0x00,
    0x66, 0x66, 0x6C, 0x00, 0x70, 0x61, 0x72, 0x65, 0x6E, 0x6C, 0x65, 0x66, 0x74, 0x69, 0x6E, 0x66,
    0x65, 0x72, 0x69, 0x6F, 0x72, 0x00, 0x70, 0x61, 0x72, 0x65, 0x6E, 0x72, 0x69, 0x67, 0x68, 0x74,
    0x69, 0x6E, 0x66, 0x65, 0x72, 0x69, 0x6F, 0x72, 0x00, 0x43, 0x69, 0x72, 0x63, 0x75, 0x6D, 0x66,
    0x6C, 0x65, 0x78, 0x73, 0x6D, 0x61, 0x6C, 0x6C, 0x00, 0x68, 0x79, 0x70, 0x68, 0x65, 0x6E, 0x73,
    0x75, 0x70, 0x65, 0x72, 0x69, 0x6F, 0x72, 0x00, 0x47, 0x72, 0x61, 0x76, 0x65, 0x73, 0x6D, 0x61,
    0x6C, 0x6C, 0x00, 0x41, 0x73, 0x6D, 0x61, 0x6C, 0x6C, 0x00, 0x42, 0x73, 0x6D, 0x61, 0x6C, 0x6C,
    0x00, 0x43, 0x73, 0x6D, 0x61, 0x6C, 0x6C, 0x00, 0x44, 0x73, 0x6D, 0x61, 0x6C, 0x6C, 0x00, 0x45,
    0x73, 0x6D, 0x61, 0x6C, 0x6C, 0x00, 0x46, 0x73, 0x6D, 0x61, 0x6C, 0x6C, 0x00, 0x47, 0x73, 0x6D,
    0x61, 0x6C, 0x6C, 0x00, 0x48, 0x73, 0x6D, 0x61, 0x6C, 0x6C, 0x00, 0x49, 0x73, 0x6D, 0x61, 0x6C,
    0x6C, 0x00, 0x4A, 0x73, 0x6D, 0x61, 0x6C, 0x6C, 0x00, 0x4B, 0x73, 0x6D, 0x61, 0x6C, 0x6C, 0x00,
    0x4C, 0x73, 0x6D, 0x61, 0x6C, 0x6C, 0x00, 0x4D, 0x73, 0x6D, 0x61, 0x6C, 0x6C, 0x00, 0x4E, 0x73,
    0x6D, 0x61, 0x6C, 0x6C, 0x00, 0x4F, 0x73, 0x6D, 0x61, 0x6C, 0x6C, 0x00, 0x50, 0x73, 0x6D, 0x61,
    0x6C, 0x6C, 0x00, 0x51, 0x73, 0x6D, 0x61, 0x6C, 0x6C, 0x00, 0x52, 0x73, 0x6D, 0x61, 0x6C, 0x6C,
    0x00, 0x53, 0x73, 0x6D, 0x61, 0x6C, 0x6C, 0x00, 0x54, 0x73, 0x6D, 0x61, 0x6C, 0x6C, 0x00, 0x55,
    0x73, 0x6D, 0x61, 0x6C, 0x6C, 0x00, 0x56, 0x73, 0x6D, 0x61, 0x6C, 0x6C, 0x00, 0x57, 0x73, 0x6D,
    0x61, 0x6C, 0x6C, 0x00, 0x58, 0x73, 0x6D, 0x61, 0x6C, 0x6C, 0x00, 0x59, 0x73, 0x6D, 0x61, 0x6C,
    0x6C, 0x00, 0x5A, 0x73, 0x6D, 0x61, 0x6C, 0x6C, 0x00, 0x63, 0x6F, 0x6C, 0x6F, 0x6E, 0x6D, 0x6F,
    0x6E, 0x65, 0x74, 0x61, 0x72, 0x79, 0x00, 0x6F, 0x6E, 0x65, 0x66, 0x69, 0x74, 0x74, 0x65, 0x64,
    0x00, 0x72, 0x75, 0x70, 0x69, 0x61, 0x68, 0x00, 0x54, 0x69, 0x6C, 0x64, 0x65, 0x73, 0x6D, 0x61,
    0x6C, 0x6C, 0x00, 0x65, 0x78, 0x63, 0x6C, 0x61, 0x6D, 0x64, 0x6F, 0x77, 0x6E, 0x73, 0x6D, 0x61,
    0x6C, 0x6C, 0x00, 0x63, 0x65, 0x6E, 0x74, 0x6F, 0x6C, 0x64, 0x73, 0x74, 0x79, 0x6C, 0x65, 0x00,
    0x4C, 0x73, 0x6C, 0x61, 0x73, 0x68, 0x73, 0x6D, 0x61, 0x6C, 0x6C, 0x00, 0x53, 0x63, 0x61, 0x72,
    0x6F, 0x6E, 0x73, 0x6D, 0x61, 0x6C, 0x6C, 0x00, 0x5A, 0x63, 0x61, 0x72, 0x6F, 0x6E, 0x73, 0x6D,
    0x61, 0x6C, 0x6C, 0x00, 0x44, 0x69, 0x65, 0x72, 0x65, 0x73, 0x69, 0x73, 0x73, 0x6D, 0x61, 0x6C,
    0x6C, 0x00, 0x42, 0x72, 0x65, 0x76, 0x65, 0x73, 0x6D, 0x61, 0x6C, 0x6C, 0x00, 0x43, 0x61, 0x72,
    0x6F, 0x6E, 0x73, 0x6D, 0x61, 0x6C, 0x6C, 0x00, 0x44, 0x6F, 0x74, 0x61, 0x63, 0x63, 0x65, 0x6E,
    0x74, 0x73, 0x6D, 0x61, 0x6C, 0x6C, 0x00, 0x4D, 0x61, 0x63, 0x72, 0x6F, 0x6E, 0x73, 0x6D, 0x61,
    0x6C, 0x6C, 0x00, 0x66, 0x69, 0x67, 0x75, 0x72, 0x65, 0x64, 0x61, 0x73, 0x68, 0x00, 0x68, 0x79,
    0x70, 0x68, 0x65, 0x6E, 0x69, 0x6E, 0x66, 0x65, 0x72, 0x69, 0x6F, 0x72, 0x00, 0x4F, 0x67, 0x6F,
    0x6E, 0x65, 0x6B, 0x73, 0x6D, 0x61, 0x6C, 0x6C, 0x00, 0x52, 0x69, 0x6E, 0x67, 0x73, 0x6D, 0x61,
    0x6C, 0x6C, 0x00, 0x43, 0x65, 0x64, 0x69, 0x6C, 0x6C, 0x61, 0x73, 0x6D, 0x61, 0x6C, 0x6C, 0x00,
    0x71, 0x75, 0x65, 0x73, 0x74, 0x69, 0x6F, 0x6E, 0x64, 0x6F, 0x77, 0x6E, 0x73, 0x6D, 0x61, 0x6C,
    0x6C, 0x00, 0x6F, 0x6E, 0x65, 0x65, 0x69, 0x67, 0x68, 0x74, 0x68, 0x00, 0x74, 0x68, 0x72, 0x65,
    0x65, 0x65, 0x69, 0x67, 0x68, 0x74, 0x68, 0x73, 0x00, 0x66, 0x69, 0x76, 0x65, 0x65, 0x69, 0x67,
    0x68, 0x74, 0x68, 0x73, 0x00, 0x73, 0x65, 0x76, 0x65, 0x6E, 0x65, 0x69, 0x67, 0x68, 0x74, 0x68,
    0x73, 0x00, 0x6F, 0x6E, 0x65, 0x74, 0x68, 0x69, 0x72, 0x64, 0x00, 0x74, 0x77, 0x6F, 0x74, 0x68,
    0x69, 0x72, 0x64, 0x73, 0x00, 0x7A, 0x65, 0x72, 0x6F, 0x73, 0x75, 0x70, 0x65, 0x72, 0x69, 0x6F,
    0x72, 0x00, 0x66, 0x6F, 0x75, 0x72, 0x73, 0x75, 0x70, 0x65, 0x72, 0x69, 0x6F, 0x72, 0x00, 0x66,
    0x69, 0x76, 0x65, 0x73, 0x75, 0x70, 0x65, 0x72, 0x69, 0x6F, 0x72, 0x00, 0x73, 0x69, 0x78, 0x73,
    0x75, 0x70, 0x65, 0x72, 0x69, 0x6F, 0x72, 0x00, 0x73, 0x65, 0x76, 0x65, 0x6E, 0x73, 0x75, 0x70,
    0x65, 0x72, 0x69, 0x6F, 0x72, 0x00, 0x65, 0x69, 0x67, 0x68, 0x74, 0x73, 0x75, 0x70, 0x65, 0x72,
    0x69, 0x6F, 0x72, 0x00, 0x6E, 0x69, 0x6E, 0x65, 0x73, 0x75, 0x70, 0x65, 0x72, 0x69, 0x6F, 0x72,
    0x00, 0x7A, 0x65, 0x72, 0x6F, 0x69, 0x6E, 0x66, 0x65, 0x72, 0x69, 0x6F, 0x72, 0x00, 0x6F, 0x6E,
    0x65, 0x69, 0x6E, 0x66, 0x65, 0x72, 0x69, 0x6F, 0x72, 0x00, 0x74, 0x77, 0x6F, 0x69, 0x6E, 0x66,
    0x65, 0x72, 0x69, 0x6F, 0x72, 0x00, 0x74, 0x68, 0x72, 0x65, 0x65, 0x69, 0x6E, 0x66, 0x65, 0x72,
    0x69, 0x6F, 0x72, 0x00, 0x66, 0x6F, 0x75, 0x72, 0x69, 0x6E, 0x66, 0x65, 0x72, 0x69, 0x6F, 0x72,
    0x00, 0x66, 0x69, 0x76, 0x65, 0x69, 0x6E, 0x66, 0x65, 0x72, 0x69, 0x6F, 0x72, 0x00, 0x73, 0x69,
    0x78, 0x69, 0x6E, 0x66, 0x65, 0x72, 0x69, 0x6F, 0x72, 0x00, 0x73, 0x65, 0x76, 0x65, 0x6E, 0x69,
    0x6E, 0x66, 0x65, 0x72, 0x69, 0x6F, 0x72, 0x00, 0x65, 0x69, 0x67, 0x68, 0x74, 0x69, 0x6E, 0x66,
    0x65, 0x72, 0x69, 0x6F, 0x72, 0x00, 0x6E, 0x69, 0x6E, 0x65, 0x69, 0x6E, 0x66, 0x65, 0x72, 0x69,
    0x6F, 0x72, 0x00, 0x63, 0x65, 0x6E, 0x74, 0x69, 0x6E, 0x66, 0x65, 0x72, 0x69, 0x6F, 0x72, 0x00,
    0x64, 0x6F, 0x6C, 0x6C, 0x61, 0x72, 0x69, 0x6E, 0x66, 0x65, 0x72, 0x69, 0x6F, 0x72, 0x00, 0x70,
    0x65, 0x72, 0x69, 0x6F, 0x64, 0x69, 0x6E, 0x66, 0x65, 0x72, 0x69, 0x6F, 0x72, 0x00, 0x63, 0x6F,
    0x6D, 0x6D, 0x61, 0x69, 0x6E, 0x66, 0x65, 0x72, 0x69, 0x6F, 0x72, 0x00, 0x41, 0x67, 0x72, 0x61,
    0x76, 0x65, 0x73, 0x6D, 0x61, 0x6C, 0x6C, 0x00, 0x41, 0x61, 0x63, 0x75, 0x74, 0x65, 0x73, 0x6D,
    0x61, 0x6C, 0x6C, 0x00, 0x41, 0x63, 0x69, 0x72, 0x63, 0x75, 0x6D, 0x66, 0x6C, 0x65, 0x78, 0x73,
    0x6D, 0x61, 0x6C, 0x6C, 0x00, 0x41, 0x74, 0x69, 0x6C, 0x64, 0x65, 0x73, 0x6D, 0x61, 0x6C, 0x6C,
    0x00, 0x41, 0x64, 0x69, 0x65, 0x72, 0x65, 0x73, 0x69, 0x73, 0x73, 0x6D, 0x61, 0x6C, 0x6C, 0x00,
    0x41, 0x72, 0x69, 0x6E, 0x67, 0x73, 0x6D, 0x61, 0x6C, 0x6C, 0x00, 0x41, 0x45, 0x73, 0x6D, 0x61,
    0x6C, 0x6C, 0x00, 0x43, 0x63, 0x65, 0x64, 0x69, 0x6C, 0x6C, 0x61, 0x73, 0x6D, 0x61, 0x6C, 0x6C,
    0x00, 0x45, 0x67, 0x72, 0x61, 0x76, 0x65, 0x73, 0x6D, 0x61, 0x6C, 0x6C, 0x00, 0x45, 0x61, 0x63,
    0x75, 0x74, 0x65, 0x73, 0x6D, 0x61, 0x6C, 0x6C, 0x00, 0x45, 0x63, 0x69, 0x72, 0x63, 0x75, 0x6D,
    0x66, 0x6C, 0x65, 0x78, 0x73, 0x6D, 0x61, 0x6C, 0x6C, 0x00, 0x45, 0x64, 0x69, 0x65, 0x72, 0x65,
    0x73, 0x69, 0x73, 0x73, 0x6D, 0x61, 0x6C, 0x6C, 0x00, 0x49, 0x67, 0x72, 0x61, 0x76, 0x65, 0x73,
    0x6D, 0x61, 0x6C, 0x6C, 0x00, 0x49, 0x61, 0x63, 0x75, 0x74, 0x65, 0x73, 0x6D, 0x61, 0x6C, 0x6C,
    0x00, 0x49, 0x63, 0x69, 0x72, 0x63, 0x75, 0x6D, 0x66, 0x6C, 0x65, 0x78, 0x73, 0x6D, 0x61, 0x6C,
    0x6C, 0x00, 0x49, 0x64, 0x69, 0x65, 0x72, 0x65, 0x73, 0x69, 0x73, 0x73, 0x6D, 0x61, 0x6C, 0x6C,
    0x00, 0x45, 0x74, 0x68, 0x73, 0x6D, 0x61, 0x6C, 0x6C, 0x00, 0x4E, 0x74, 0x69, 0x6C, 0x64, 0x65,
    0x73, 0x6D, 0x61, 0x6C, 0x6C, 0x00, 0x4F, 0x67, 0x72, 0x61, 0x76, 0x65, 0x73, 0x6D, 0x61, 0x6C,
    0x6C, 0x00, 0x4F, 0x61, 0x63, 0x75, 0x74, 0x65, 0x73, 0x6D, 0x61, 0x6C, 0x6C, 0x00, 0x4F, 0x63,
    0x69, 0x72, 0x63, 0x75, 0x6D, 0x66, 0x6C, 0x65, 0x78, 0x73, 0x6D, 0x61, 0x6C, 0x6C, 0x00, 0x4F,
    0x74, 0x69, 0x6C, 0x64, 0x65, 0x73, 0x6D, 0x61, 0x6C, 0x6C, 0x00, 0x4F, 0x64, 0x69, 0x65, 0x72,
    0x65, 0x73, 0x69, 0x73, 0x73, 0x6D, 0x61, 0x6C, 0x6C, 0x00, 0x4F, 0x45, 0x73, 0x6D, 0x61, 0x6C,
    0x6C, 0x00, 0x4F, 0x73, 0x6C, 0x61, 0x73, 0x68, 0x73, 0x6D, 0x61, 0x6C, 0x6C, 0x00, 0x55, 0x67,
    0x72, 0x61, 0x76, 0x65, 0x73, 0x6D, 0x61, 0x6C, 0x6C, 0x00, 0x55, 0x61, 0x63, 0x75, 0x74, 0x65,
    0x73, 0x6D, 0x61, 0x6C, 0x6C, 0x00, 0x55, 0x63, 0x69, 0x72, 0x63, 0x75, 0x6D, 0x66, 0x6C, 0x65,
    0x78, 0x73, 0x6D, 0x61, 0x6C, 0x6C, 0x00, 0x55, 0x64, 0x69, 0x65, 0x72, 0x65, 0x73, 0x69, 0x73,
    0x73, 0x6D, 0x61, 0x6C, 0x6C, 0x00, 0x59, 0x61, 0x63, 0x75, 0x74, 0x65, 0x73, 0x6D, 0x61, 0x6C,
    0x6C, 0x00, 0x54, 0x68, 0x6F, 0x72, 0x6E, 0x73, 0x6D, 0x61, 0x6C, 0x6C, 0x00, 0x59, 0x64, 0x69,
    0x65, 0x72, 0x65, 0x73, 0x69, 0x73, 0x73, 0x6D, 0x61, 0x6C, 0x6C, 0x00, 0x30, 0x30, 0x31, 0x2E,
    0x30, 0x30, 0x30, 0x00, 0x30, 0x30, 0x31, 0x2E, 0x30, 0x30, 0x31, 0x00, 0x30, 0x30, 0x31, 0x2E,
    0x30, 0x30, 0x32, 0x00, 0x30, 0x30, 0x31, 0x2E, 0x30, 0x30, 0x33, 0x00, 0x42, 0x6C, 0x61, 0x63,
    0x6B, 0x00, 0x42, 0x6F, 0x6C, 0x64, 0x00, 0x42, 0x6F, 0x6F, 0x6B, 0x00, 0x4C, 0x69, 0x67, 0x68,
    0x74, 0x00, 0x4D, 0x65, 0x64, 0x69, 0x75, 0x6D, 0x00, 0x52, 0x65, 0x67, 0x75, 0x6C, 0x61, 0x72,
    0x00, 0x52, 0x6F, 0x6D, 0x61, 0x6E, 0x00, 0x53, 0x65, 0x6D, 0x69, 0x62, 0x6F, 0x6C, 0x64, 0x00,
];

/// Offsets into [`STANDARD_GLYPH_NAMES`] for the standard Macintosh glyph names.
#[rustfmt::skip]
pub static MAC_GLYPH_NAMES: [u16; 258] = [
    253, 0, 6, 261, 267, 274, 283, 294, 301, 309, 758, 330,
    340, 351, 360, 365, 371, 378, 385, 391, 396, 400, 404, 410,
    415, 420, 424, 430, 436, 441, 447, 457, 462, 468, 476, 485,
    488, 490, 492, 494, 496, 498, 500, 502, 504, 506, 508, 510,
    512, 514, 516, 518, 520, 522, 524, 526, 528, 530, 532, 534,
    536, 538, 540, 552, 562, 575, 587, 979, 608, 610, 612, 614,
    616, 618, 620, 622, 624, 626, 628, 630, 632, 634, 636, 638,
    640, 642, 644, 646, 648, 650, 652, 654, 656, 658, 660, 670,
    674, 685, 1375, 1392, 1405, 1414, 1486, 1512, 1562, 1603, 1632, 1610,
    1622, 1645, 1639, 1652, 1661, 1690, 1668, 1680, 1697, 1726, 1704, 1716,
    1733, 1740, 1769, 1747, 1759, 1776, 1790, 1819, 1797, 1809, 839, 1263,
    707, 712, 741, 881, 871, 1160, 1302, 1346, 1197, 985, 1031, 23,
    1086, 1108, 32, 1219, 41, 51, 730, 1194, 64, 76, 86, 94,
    97, 1089, 1118, 106, 1131, 1150, 966, 696, 1183, 112, 734, 120,
    132, 783, 930, 945, 138, 1385, 1398, 1529, 1115, 1157, 832, 1079,
    770, 916, 598, 319, 1246, 155, 1833, 1586, 721, 749, 797, 811,
    826, 829, 846, 856, 888, 903, 954, 1363, 1421, 1356, 1433, 1443,
    1450, 1457, 1469, 1479, 1493, 1500, 163, 1522, 1543, 1550, 1572, 1134,
    991, 1002, 1008, 1015, 1021, 1040, 1045, 1053, 1066, 1073, 1101, 1143,
    1536, 1783, 1596, 1843, 1253, 1207, 1319, 1579, 1826, 1229, 1270, 1313,
    1323, 1171, 1290, 1332, 1211, 1235, 1276, 169, 175, 182, 189, 200,
    209, 218, 225, 232, 239, 246,
];

/// Offsets into [`STANDARD_GLYPH_NAMES`] for the standard strings, by SID.
#[rustfmt::skip]
pub static SID_GLYPH_NAMES: [u16; 391] = [
    253, 261, 267, 274, 283, 294, 301, 309, 319, 330, 340, 351,
    360, 365, 371, 378, 385, 391, 396, 400, 404, 410, 415, 420,
    424, 430, 436, 441, 447, 457, 462, 468, 476, 485, 488, 490,
    492, 494, 496, 498, 500, 502, 504, 506, 508, 510, 512, 514,
    516, 518, 520, 522, 524, 526, 528, 530, 532, 534, 536, 538,
    540, 552, 562, 575, 587, 598, 608, 610, 612, 614, 616, 618,
    620, 622, 624, 626, 628, 630, 632, 634, 636, 638, 640, 642,
    644, 646, 648, 650, 652, 654, 656, 658, 660, 670, 674, 685,
    696, 707, 712, 721, 730, 734, 741, 749, 758, 770, 783, 797,
    811, 826, 829, 832, 839, 846, 856, 871, 881, 888, 903, 916,
    930, 945, 954, 966, 979, 985, 991, 1002, 1008, 1015, 1021, 1031,
    1040, 1045, 1053, 1066, 1073, 1079, 1086, 1089, 1101, 1108, 1115, 1118,
    1131, 1134, 1143, 1150, 1157, 1160, 1171, 1183, 1194, 1197, 1207, 1211,
    1219, 1229, 1235, 1246, 1253, 1263, 1270, 1276, 1290, 1302, 1313, 1319,
    1323, 1332, 1346, 1356, 1363, 1375, 1385, 1392, 1398, 1405, 1414, 1421,
    1433, 1443, 1450, 1457, 1469, 1479, 1486, 1493, 1500, 1512, 1522, 1529,
    1536, 1543, 1550, 1562, 1572, 1579, 1586, 1596, 1603, 1610, 1622, 1632,
    1639, 1645, 1652, 1661, 1668, 1680, 1690, 1697, 1704, 1716, 1726, 1733,
    1740, 1747, 1759, 1769, 1776, 1783, 1790, 1797, 1809, 1819, 1826, 1833,
    1843, 1850, 1862, 1880, 1895, 1910, 1925, 1936, 1954, 1973, 1988, 2003,
    2016, 2028, 2040, 2054, 2067, 2080, 2092, 2106, 2120, 2133, 2147, 2167,
    2182, 2196, 2206, 2216, 2229, 2239, 2249, 2259, 2269, 2279, 2289, 2299,
    2309, 2319, 2329, 2332, 2336, 2340, 2358, 2377, 2393, 2408, 2419, 2426,
    2433, 2440, 2447, 2454, 2461, 2468, 2475, 2482, 2489, 2496, 2503, 2510,
    2517, 2524, 2531, 2538, 2545, 2552, 2559, 2566, 2573, 2580, 2587, 2594,
    2601, 2615, 2625, 2632, 2643, 2659, 2672, 2684, 2696, 2708, 2722, 2733,
    2744, 2759, 2771, 2782, 2797, 2809, 2819, 2832, 2850, 2860, 2873, 2885,
    2898, 2907, 2917, 2930, 2943, 2956, 2968, 2982, 2996, 3009, 3022, 3034,
    3046, 3060, 3073, 3086, 3098, 3112, 3126, 3139, 3152, 3167, 3182, 3196,
    3208, 3220, 3237, 3249, 3264, 3275, 3283, 3297, 3309, 3321, 3338, 3353,
    3365, 3377, 3394, 3409, 3418, 3430, 3442, 3454, 3471, 3483, 3498, 3506,
    3518, 3530, 3542, 3559, 3574, 3586, 3597, 3612, 3620, 3628, 3636, 3644,
    3650, 3655, 3660, 3666, 3673, 3681, 3687,
];

/// The SID of the glyph assigned to each code by the Adobe standard encoding.
#[rustfmt::skip]
pub static STANDARD_ENCODING: [u16; 256] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 3, 4,
    5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16,
    17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28,
    29, 30, 31, 32, 33, 34, 35, 36, 37, 38, 39, 40,
    41, 42, 43, 44, 45, 46, 47, 48, 49, 50, 51, 52,
    53, 54, 55, 56, 57, 58, 59, 60, 61, 62, 63, 64,
    65, 66, 67, 68, 69, 70, 71, 72, 73, 74, 75, 76,
    77, 78, 79, 80, 81, 82, 83, 84, 85, 86, 87, 88,
    89, 90, 91, 92, 93, 94, 95, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 96, 97, 98, 99, 100, 101, 102,
    103, 104, 105, 106, 107, 108, 109, 110, 0, 111, 112, 113,
    114, 0, 115, 116, 117, 118, 119, 120, 121, 122, 0, 123,
    0, 124, 125, 126, 127, 128, 129, 130, 131, 0, 132, 133,
    0, 134, 135, 136, 137, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 138, 0, 139,
    0, 0, 0, 0, 140, 141, 142, 143, 0, 0, 0, 0,
    0, 144, 0, 0, 0, 145, 0, 0, 146, 147, 148, 149,
    0, 0, 0, 0,
];

/// The SID of the glyph assigned to each code by the Adobe expert encoding.
#[rustfmt::skip]
pub static EXPERT_ENCODING: [u16; 256] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 1, 229, 230, 0,
    231, 232, 233, 234, 235, 236, 237, 238, 13, 14, 15, 99,
    239, 240, 241, 242, 243, 244, 245, 246, 247, 248, 27, 28,
    249, 250, 251, 252, 0, 253, 254, 255, 256, 257, 0, 0,
    0, 258, 0, 0, 259, 260, 261, 262, 0, 0, 263, 264,
    265, 0, 266, 109, 110, 267, 268, 269, 0, 270, 271, 272,
    273, 274, 275, 276, 277, 278, 279, 280, 281, 282, 283, 284,
    285, 286, 287, 288, 289, 290, 291, 292, 293, 294, 295, 296,
    297, 298, 299, 300, 301, 302, 303, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 304, 305, 306, 0, 0, 307, 308,
    309, 310, 311, 0, 312, 0, 0, 313, 0, 0, 314, 315,
    0, 0, 316, 317, 318, 0, 0, 0, 158, 155, 163, 319,
    320, 321, 322, 323, 324, 325, 0, 0, 326, 150, 164, 169,
    327, 328, 329, 330, 331, 332, 333, 334, 335, 336, 337, 338,
    339, 340, 341, 342, 343, 344, 345, 346, 347, 348, 349, 350,
    351, 352, 353, 354, 355, 356, 357, 358, 359, 360, 361, 362,
    363, 364, 365, 366, 367, 368, 369, 370, 371, 372, 373, 374,
    375, 376, 377, 378,
];

/// A compressed version of the Adobe Glyph List.
///
/// Each name is stored in a trie, packed into a format that can be
/// searched in place with [`crate::lookup`].
#[rustfmt::skip]
pub static ADOBE_GLYPH_LIST: [u8; 55987] = [
    0x00, 0x34, 0x00, 0x6A, 0x02, 0xA7, 0x03, 0x3F, 0x04, 0xDC, 0x06, 0x7D, 0x09, 0x8F, 0x0A, 0x17,
    0x0B, 0x89, 0x0C, 0xC7, 0x0E, 0xF6, 0x0F, 0x57, 0x10, 0xE9, 0x11, 0xDB, 0x12, 0x68, 0x13, 0x58,
    0x16, 0x6E, 0x17, 0x20, 0x17, 0x47, 0x18, 0x4D, 0x1B, 0x9C, 0x1D, 0x49, 0x1F, 0xF7, 0x20, 0x6B,
    0x20, 0xDE, 0x21, 0x37, 0x22, 0x9A, 0x23, 0xDA, 0x3A, 0x0A, 0x40, 0x70, 0x48, 0xB2, 0x50, 0x63,
    0x58, 0x5E, 0x5D, 0x33, 0x62, 0x9E, 0x6A, 0x51, 0x72, 0x65, 0x73, 0xE3, 0x7A, 0xAA, 0x7F, 0xF5,
    0x87, 0x9A, 0x8F, 0x7A, 0x95, 0xCB, 0x9E, 0x62, 0xA1, 0x69, 0xA8, 0xA5, 0xB7, 0x89, 0xC5, 0xBD,
    0xCA, 0x0F, 0xCC, 0x9C, 0xD0, 0xC7, 0xD1, 0x47, 0xD7, 0x10, 0x41, 0x8F, 0x00, 0x41, 0x00, 0x8C,
    0x00, 0xAF, 0x00, 0xC1, 0x01, 0x0F, 0x01, 0x93, 0x01, 0xE9, 0x01, 0xFB, 0x02, 0x07, 0x02, 0x28,
    0x02, 0x39, 0x02, 0x52, 0x02, 0x5B, 0x02, 0x80, 0x02, 0x88, 0x02, 0x9A, 0x45, 0x83, 0x00, 0xC6,
    0x00, 0x96, 0x00, 0x9E, 0x00, 0xA7, 0xE1, 0xE3, 0xF5, 0xF4, 0x65, 0x80, 0x01, 0xFC, 0xED, 0xE1,
    0xE3, 0xF2, 0xEF, 0x6E, 0x80, 0x01, 0xE2, 0xF3, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xF7, 0xE6, 0xE1,
    0xE3, 0xF5, 0xF4, 0x65, 0x81, 0x00, 0xC1, 0x00, 0xB9, 0xF3, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xF7,
    0xE1, 0xE2, 0xF2, 0xE5, 0xF6, 0x65, 0x86, 0x01, 0x02, 0x00, 0xD5, 0x00, 0xDD, 0x00, 0xE8, 0x00,
    0xF3, 0x00, 0xFB, 0x01, 0x07, 0xE1, 0xE3, 0xF5, 0xF4, 0x65, 0x80, 0x1E, 0xAE, 0xE3, 0xF9, 0xF2,
    0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0xD0, 0xE4, 0xEF, 0xF4, 0xE2, 0xE5, 0xEC, 0xEF, 0x77,
    0x80, 0x1E, 0xB6, 0xE7, 0xF2, 0xE1, 0xF6, 0x65, 0x80, 0x1E, 0xB0, 0xE8, 0xEF, 0xEF, 0xEB, 0xE1,
    0xE2, 0xEF, 0xF6, 0x65, 0x80, 0x1E, 0xB2, 0xF4, 0xE9, 0xEC, 0xE4, 0x65, 0x80, 0x1E, 0xB4, 0x63,
    0x04, 0x01, 0x19, 0x01, 0x20, 0x01, 0x79, 0x01, 0x89, 0xE1, 0xF2, 0xEF, 0x6E, 0x80, 0x01, 0xCD,
    0xE9, 0xF2, 0x63, 0x02, 0x01, 0x28, 0x01, 0x2D, 0xEC, 0x65, 0x80, 0x24, 0xB6, 0xF5, 0xED, 0xE6,
    0xEC, 0xE5, 0x78, 0x86, 0x00, 0xC2, 0x01, 0x42, 0x01, 0x4A, 0x01, 0x55, 0x01, 0x5D, 0x01, 0x69,
    0x01, 0x71, 0xE1, 0xE3, 0xF5, 0xF4, 0x65, 0x80, 0x1E, 0xA4, 0xE4, 0xEF, 0xF4, 0xE2, 0xE5, 0xEC,
    0xEF, 0x77, 0x80, 0x1E, 0xAC, 0xE7, 0xF2, 0xE1, 0xF6, 0x65, 0x80, 0x1E, 0xA6, 0xE8, 0xEF, 0xEF,
    0xEB, 0xE1, 0xE2, 0xEF, 0xF6, 0x65, 0x80, 0x1E, 0xA8, 0xF3, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xF7,
    0xE2, 0xF4, 0xE9, 0xEC, 0xE4, 0x65, 0x80, 0x1E, 0xAA, 0xF5, 0xF4, 0x65, 0x81, 0xF6, 0xC9, 0x01,
    0x81, 0xF3, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xF7, 0xB4, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63,
    0x80, 0x04, 0x10, 0x64, 0x03, 0x01, 0x9B, 0x01, 0xA5, 0x01, 0xD1, 0xE2, 0xEC, 0xE7, 0xF2, 0xE1,
    0xF6, 0x65, 0x80, 0x02, 0x00, 0xE9, 0xE5, 0xF2, 0xE5, 0xF3, 0xE9, 0x73, 0x83, 0x00, 0xC4, 0x01,
    0xB5, 0x01, 0xC0, 0x01, 0xC9, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0xD2,
    0xED, 0xE1, 0xE3, 0xF2, 0xEF, 0x6E, 0x80, 0x01, 0xDE, 0xF3, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xF7,
    0xE4, 0xEF, 0x74, 0x02, 0x01, 0xD8, 0x01, 0xE0, 0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E, 0xA0,
    0xED, 0xE1, 0xE3, 0xF2, 0xEF, 0x6E, 0x80, 0x01, 0xE0, 0xE7, 0xF2, 0xE1, 0xF6, 0x65, 0x81, 0x00,
    0xC0, 0x01, 0xF3, 0xF3, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xF7, 0xE0, 0xE8, 0xEF, 0xEF, 0xEB, 0xE1,
    0xE2, 0xEF, 0xF6, 0x65, 0x80, 0x1E, 0xA2, 0x69, 0x02, 0x02, 0x0D, 0x02, 0x19, 0xE5, 0xE3, 0xF9,
    0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0xD4, 0xEE, 0xF6, 0xE5, 0xF2, 0xF4, 0xE5, 0xE4,
    0xE2, 0xF2, 0xE5, 0xF6, 0x65, 0x80, 0x02, 0x02, 0xEC, 0xF0, 0xE8, 0x61, 0x81, 0x03, 0x91, 0x02,
    0x31, 0xF4, 0xEF, 0xEE, 0xEF, 0x73, 0x80, 0x03, 0x86, 0x6D, 0x02, 0x02, 0x3F, 0x02, 0x47, 0xE1,
    0xE3, 0xF2, 0xEF, 0x6E, 0x80, 0x01, 0x00, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80,
    0xFF, 0x21, 0xEF, 0xE7, 0xEF, 0xEE, 0xE5, 0x6B, 0x80, 0x01, 0x04, 0xF2, 0xE9, 0xEE, 0x67, 0x83,
    0x00, 0xC5, 0x02, 0x68, 0x02, 0x70, 0x02, 0x78, 0xE1, 0xE3, 0xF5, 0xF4, 0x65, 0x80, 0x01, 0xFA,
    0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E, 0x00, 0xF3, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xF7, 0xE5,
    0xF3, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xF7, 0x61, 0xF4, 0xE9, 0xEC, 0xE4, 0x65, 0x81, 0x00, 0xC3,
    0x02, 0x92, 0xF3, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xF7, 0xE3, 0xF9, 0xE2, 0xE1, 0xF2, 0xED, 0xE5,
    0xEE, 0xE9, 0xE1, 0x6E, 0x80, 0x05, 0x31, 0x42, 0x89, 0x00, 0x42, 0x02, 0xBD, 0x02, 0xC6, 0x02,
    0xDF, 0x03, 0x03, 0x03, 0x0A, 0x03, 0x16, 0x03, 0x22, 0x03, 0x2E, 0x03, 0x36, 0xE3, 0xE9, 0xF2,
    0xE3, 0xEC, 0x65, 0x80, 0x24, 0xB7, 0xE4, 0xEF, 0x74, 0x02, 0x02, 0xCE, 0x02, 0xD7, 0xE1, 0xE3,
    0xE3, 0xE5, 0xEE, 0x74, 0x80, 0x1E, 0x02, 0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E, 0x04, 0x65,
    0x03, 0x02, 0xE7, 0x02, 0xF2, 0x02, 0xFE, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80,
    0x04, 0x11, 0xEE, 0xE1, 0xF2, 0xED, 0xE5, 0xEE, 0xE9, 0xE1, 0x6E, 0x80, 0x05, 0x32, 0xF4, 0x61,
    0x80, 0x03, 0x92, 0xE8, 0xEF, 0xEF, 0x6B, 0x80, 0x01, 0x81, 0xEC, 0xE9, 0xEE, 0xE5, 0xE2, 0xE5,
    0xEC, 0xEF, 0x77, 0x80, 0x1E, 0x06, 0xED, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80,
    0xFF, 0x22, 0xF2, 0xE5, 0xF6, 0xE5, 0xF3, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xF6, 0xF4, 0xF3, 0xED,
    0xE1, 0xEC, 0x6C, 0x80, 0xF7, 0x62, 0xF4, 0xEF, 0xF0, 0xE2, 0xE1, 0x72, 0x80, 0x01, 0x82, 0x43,
    0x89, 0x00, 0x43, 0x03, 0x55, 0x03, 0x7F, 0x03, 0xC1, 0x03, 0xD2, 0x03, 0xE0, 0x04, 0xAB, 0x04,
    0xBC, 0x04, 0xC8, 0x04, 0xD4, 0x61, 0x03, 0x03, 0x5D, 0x03, 0x68, 0x03, 0x6F, 0xE1, 0xF2, 0xED,
    0xE5, 0xEE, 0xE9, 0xE1, 0x6E, 0x80, 0x05, 0x3E, 0xE3, 0xF5, 0xF4, 0x65, 0x80, 0x01, 0x06, 0xF2,
    0xEF, 0x6E, 0x81, 0xF6, 0xCA, 0x03, 0x77, 0xF3, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xF6, 0xF5, 0x63,
    0x03, 0x03, 0x87, 0x03, 0x8E, 0x03, 0xAB, 0xE1, 0xF2, 0xEF, 0x6E, 0x80, 0x01, 0x0C, 0xE5, 0xE4,
    0xE9, 0xEC, 0xEC, 0x61, 0x82, 0x00, 0xC7, 0x03, 0x9B, 0x03, 0xA3, 0xE1, 0xE3, 0xF5, 0xF4, 0x65,
    0x80, 0x1E, 0x08, 0xF3, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xF7, 0xE7, 0xE9, 0xF2, 0x63, 0x02, 0x03,
    0xB3, 0x03, 0xB8, 0xEC, 0x65, 0x80, 0x24, 0xB8, 0xF5, 0xED, 0xE6, 0xEC, 0xE5, 0x78, 0x80, 0x01,
    0x08, 0xE4, 0xEF, 0x74, 0x81, 0x01, 0x0A, 0x03, 0xC9, 0xE1, 0xE3, 0xE3, 0xE5, 0xEE, 0x74, 0x80,
    0x01, 0x0A, 0xE5, 0xE4, 0xE9, 0xEC, 0xEC, 0xE1, 0xF3, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xF7, 0xB8,
    0x68, 0x04, 0x03, 0xEA, 0x03, 0xF6, 0x04, 0xA1, 0x04, 0xA5, 0xE1, 0xE1, 0xF2, 0xED, 0xE5, 0xEE,
    0xE9, 0xE1, 0x6E, 0x80, 0x05, 0x49, 0x65, 0x06, 0x04, 0x04, 0x04, 0x18, 0x04, 0x23, 0x04, 0x67,
    0x04, 0x73, 0x04, 0x88, 0xE1, 0xE2, 0xEB, 0xE8, 0xE1, 0xF3, 0xE9, 0xE1, 0xEE, 0xE3, 0xF9, 0xF2,
    0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0xBC, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63,
    0x80, 0x04, 0x27, 0x64, 0x02, 0x04, 0x29, 0x04, 0x55, 0xE5, 0xF3, 0xE3, 0xE5, 0xEE, 0xE4, 0xE5,
    0x72, 0x02, 0x04, 0x36, 0x04, 0x4A, 0xE1, 0xE2, 0xEB, 0xE8, 0xE1, 0xF3, 0xE9, 0xE1, 0xEE, 0xE3,
    0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0xBE, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC,
    0xE9, 0x63, 0x80, 0x04, 0xB6, 0xE9, 0xE5, 0xF2, 0xE5, 0xF3, 0xE9, 0xF3, 0xE3, 0xF9, 0xF2, 0xE9,
    0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0xF4, 0xE8, 0xE1, 0xF2, 0xED, 0xE5, 0xEE, 0xE9, 0xE1, 0x6E,
    0x80, 0x05, 0x43, 0xEB, 0xE8, 0xE1, 0xEB, 0xE1, 0xF3, 0xF3, 0xE9, 0xE1, 0xEE, 0xE3, 0xF9, 0xF2,
    0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0xCB, 0xF6, 0xE5, 0xF2, 0xF4, 0xE9, 0xE3, 0xE1, 0xEC,
    0xF3, 0xF4, 0xF2, 0xEF, 0xEB, 0xE5, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04,
    0xB8, 0x69, 0x80, 0x03, 0xA7, 0xEF, 0xEF, 0x6B, 0x80, 0x01, 0x87, 0xE9, 0xF2, 0xE3, 0xF5, 0xED,
    0xE6, 0xEC, 0xE5, 0xF8, 0xF3, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xF6, 0xF6, 0xED, 0xEF, 0xEE, 0xEF,
    0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80, 0xFF, 0x23, 0xEF, 0xE1, 0xF2, 0xED, 0xE5, 0xEE, 0xE9, 0xE1,
    0x6E, 0x80, 0x05, 0x51, 0xF3, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xF7, 0x63, 0x44, 0x8E, 0x00, 0x44,
    0x04, 0xFC, 0x05, 0x0A, 0x05, 0x24, 0x05, 0x60, 0x05, 0x79, 0x05, 0xA6, 0x05, 0xAD, 0x05, 0xE7,
    0x05, 0xF4, 0x06, 0x00, 0x06, 0x0C, 0x06, 0x1C, 0x06, 0x30, 0x06, 0x39, 0x5A, 0x81, 0x01, 0xF1,
    0x05, 0x02, 0xE3, 0xE1, 0xF2, 0xEF, 0x6E, 0x80, 0x01, 0xC4, 0x61, 0x02, 0x05, 0x10, 0x05, 0x1B,
    0xE1, 0xF2, 0xED, 0xE5, 0xEE, 0xE9, 0xE1, 0x6E, 0x80, 0x05, 0x34, 0xE6, 0xF2, 0xE9, 0xE3, 0xE1,
    0x6E, 0x80, 0x01, 0x89, 0x63, 0x04, 0x05, 0x2E, 0x05, 0x35, 0x05, 0x3E, 0x05, 0x59, 0xE1, 0xF2,
    0xEF, 0x6E, 0x80, 0x01, 0x0E, 0xE5, 0xE4, 0xE9, 0xEC, 0xEC, 0x61, 0x80, 0x1E, 0x10, 0xE9, 0xF2,
    0x63, 0x02, 0x05, 0x46, 0x05, 0x4B, 0xEC, 0x65, 0x80, 0x24, 0xB9, 0xF5, 0xED, 0xE6, 0xEC, 0xE5,
    0xF8, 0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E, 0x12, 0xF2, 0xEF, 0xE1, 0x74, 0x80, 0x01, 0x10,
    0xE4, 0xEF, 0x74, 0x02, 0x05, 0x68, 0x05, 0x71, 0xE1, 0xE3, 0xE3, 0xE5, 0xEE, 0x74, 0x80, 0x1E,
    0x0A, 0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E, 0x0C, 0x65, 0x03, 0x05, 0x81, 0x05, 0x8C, 0x05,
    0x96, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x14, 0xE9, 0xE3, 0xEF, 0xF0,
    0xF4, 0xE9, 0x63, 0x80, 0x03, 0xEE, 0xEC, 0xF4, 0x61, 0x81, 0x22, 0x06, 0x05, 0x9E, 0xE7, 0xF2,
    0xE5, 0xE5, 0x6B, 0x80, 0x03, 0x94, 0xE8, 0xEF, 0xEF, 0x6B, 0x80, 0x01, 0x8A, 0x69, 0x02, 0x05,
    0xB3, 0x05, 0xDA, 0xE5, 0xF2, 0xE5, 0xF3, 0xE9, 0x73, 0x83, 0xF6, 0xCB, 0x05, 0xC2, 0x05, 0xCA,
    0x05, 0xD2, 0xC1, 0xE3, 0xF5, 0xF4, 0x65, 0x80, 0xF6, 0xCC, 0xC7, 0xF2, 0xE1, 0xF6, 0x65, 0x80,
    0xF6, 0xCD, 0xF3, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xF7, 0xA8, 0xE7, 0xE1, 0xED, 0xED, 0xE1, 0xE7,
    0xF2, 0xE5, 0xE5, 0x6B, 0x80, 0x03, 0xDC, 0xEA, 0xE5, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9,
    0x63, 0x80, 0x04, 0x02, 0xEC, 0xE9, 0xEE, 0xE5, 0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E, 0x0E,
    0xED, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80, 0xFF, 0x24, 0xEF, 0xF4, 0xE1, 0xE3,
    0xE3, 0xE5, 0xEE, 0xF4, 0xF3, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xF6, 0xF7, 0x73, 0x02, 0x06, 0x22,
    0x06, 0x29, 0xEC, 0xE1, 0xF3, 0x68, 0x80, 0x01, 0x10, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xF7, 0x64,
    0xF4, 0xEF, 0xF0, 0xE2, 0xE1, 0x72, 0x80, 0x01, 0x8B, 0x7A, 0x83, 0x01, 0xF2, 0x06, 0x43, 0x06,
    0x4B, 0x06, 0x70, 0xE3, 0xE1, 0xF2, 0xEF, 0x6E, 0x80, 0x01, 0xC5, 0x65, 0x02, 0x06, 0x51, 0x06,
    0x65, 0xE1, 0xE2, 0xEB, 0xE8, 0xE1, 0xF3, 0xE9, 0xE1, 0xEE, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC,
    0xE9, 0x63, 0x80, 0x04, 0xE0, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x05,
    0xE8, 0xE5, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x0F, 0x45, 0x92, 0x00,
    0x45, 0x06, 0xA5, 0x06, 0xB7, 0x06, 0xBF, 0x07, 0x59, 0x07, 0x99, 0x07, 0xA5, 0x07, 0xB7, 0x07,
    0xD3, 0x08, 0x07, 0x08, 0x24, 0x08, 0x5E, 0x08, 0xA9, 0x08, 0xBD, 0x08, 0xD0, 0x08, 0xF8, 0x09,
    0x2C, 0x09, 0x6D, 0x09, 0x73, 0xE1, 0xE3, 0xF5, 0xF4, 0x65, 0x81, 0x00, 0xC9, 0x06, 0xAF, 0xF3,
    0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xF7, 0xE9, 0xE2, 0xF2, 0xE5, 0xF6, 0x65, 0x80, 0x01, 0x14, 0x63,
    0x05, 0x06, 0xCB, 0x06, 0xD2, 0x06, 0xE0, 0x06, 0xEC, 0x07, 0x4F, 0xE1, 0xF2, 0xEF, 0x6E, 0x80,
    0x01, 0x1A, 0xE5, 0xE4, 0xE9, 0xEC, 0xEC, 0xE1, 0xE2, 0xF2, 0xE5, 0xF6, 0x65, 0x80, 0x1E, 0x1C,
    0xE8, 0xE1, 0xF2, 0xED, 0xE5, 0xEE, 0xE9, 0xE1, 0x6E, 0x80, 0x05, 0x35, 0xE9, 0xF2, 0x63, 0x02,
    0x06, 0xF4, 0x06, 0xF9, 0xEC, 0x65, 0x80, 0x24, 0xBA, 0xF5, 0xED, 0xE6, 0xEC, 0xE5, 0x78, 0x87,
    0x00, 0xCA, 0x07, 0x10, 0x07, 0x18, 0x07, 0x20, 0x07, 0x2B, 0x07, 0x33, 0x07, 0x3F, 0x07, 0x47,
    0xE1, 0xE3, 0xF5, 0xF4, 0x65, 0x80, 0x1E, 0xBE, 0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E, 0x18,
    0xE4, 0xEF, 0xF4, 0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E, 0xC6, 0xE7, 0xF2, 0xE1, 0xF6, 0x65,
    0x80, 0x1E, 0xC0, 0xE8, 0xEF, 0xEF, 0xEB, 0xE1, 0xE2, 0xEF, 0xF6, 0x65, 0x80, 0x1E, 0xC2, 0xF3,
    0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xF7, 0xEA, 0xF4, 0xE9, 0xEC, 0xE4, 0x65, 0x80, 0x1E, 0xC4, 0xF9,
    0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x04, 0x64, 0x03, 0x07, 0x61, 0x07, 0x6B, 0x07,
    0x7F, 0xE2, 0xEC, 0xE7, 0xF2, 0xE1, 0xF6, 0x65, 0x80, 0x02, 0x04, 0xE9, 0xE5, 0xF2, 0xE5, 0xF3,
    0xE9, 0x73, 0x81, 0x00, 0xCB, 0x07, 0x77, 0xF3, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xF7, 0xEB, 0xEF,
    0x74, 0x82, 0x01, 0x16, 0x07, 0x88, 0x07, 0x91, 0xE1, 0xE3, 0xE3, 0xE5, 0xEE, 0x74, 0x80, 0x01,
    0x16, 0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E, 0xB8, 0xE6, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC,
    0xE9, 0x63, 0x80, 0x04, 0x24, 0xE7, 0xF2, 0xE1, 0xF6, 0x65, 0x81, 0x00, 0xC8, 0x07, 0xAF, 0xF3,
    0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xF7, 0xE8, 0x68, 0x02, 0x07, 0xBD, 0x07, 0xC8, 0xE1, 0xF2, 0xED,
    0xE5, 0xEE, 0xE9, 0xE1, 0x6E, 0x80, 0x05, 0x37, 0xEF, 0xEF, 0xEB, 0xE1, 0xE2, 0xEF, 0xF6, 0x65,
    0x80, 0x1E, 0xBA, 0x69, 0x03, 0x07, 0xDB, 0x07, 0xE6, 0x07, 0xF5, 0xE7, 0xE8, 0xF4, 0xF2, 0xEF,
    0xED, 0xE1, 0x6E, 0x80, 0x21, 0x67, 0xEE, 0xF6, 0xE5, 0xF2, 0xF4, 0xE5, 0xE4, 0xE2, 0xF2, 0xE5,
    0xF6, 0x65, 0x80, 0x02, 0x06, 0xEF, 0xF4, 0xE9, 0xE6, 0xE9, 0xE5, 0xE4, 0xE3, 0xF9, 0xF2, 0xE9,
    0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x64, 0x6C, 0x02, 0x08, 0x0D, 0x08, 0x18, 0xE3, 0xF9, 0xF2,
    0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x1B, 0xE5, 0xF6, 0xE5, 0xEE, 0xF2, 0xEF, 0xED, 0xE1,
    0x6E, 0x80, 0x21, 0x6A, 0x6D, 0x03, 0x08, 0x2C, 0x08, 0x48, 0x08, 0x53, 0xE1, 0xE3, 0xF2, 0xEF,
    0x6E, 0x82, 0x01, 0x12, 0x08, 0x38, 0x08, 0x40, 0xE1, 0xE3, 0xF5, 0xF4, 0x65, 0x80, 0x1E, 0x16,
    0xE7, 0xF2, 0xE1, 0xF6, 0x65, 0x80, 0x1E, 0x14, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63,
    0x80, 0x04, 0x1C, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80, 0xFF, 0x25, 0x6E, 0x04,
    0x08, 0x68, 0x08, 0x73, 0x08, 0x87, 0x08, 0x9A, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63,
    0x80, 0x04, 0x1D, 0xE4, 0xE5, 0xF3, 0xE3, 0xE5, 0xEE, 0xE4, 0xE5, 0xF2, 0xE3, 0xF9, 0xF2, 0xE9,
    0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0xA2, 0x67, 0x81, 0x01, 0x4A, 0x08, 0x8D, 0xE8, 0xE5, 0xE3,
    0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0xA4, 0xE8, 0xEF, 0xEF, 0xEB, 0xE3, 0xF9,
    0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0xC7, 0x6F, 0x02, 0x08, 0xAF, 0x08, 0xB7, 0xE7,
    0xEF, 0xEE, 0xE5, 0x6B, 0x80, 0x01, 0x18, 0xF0, 0xE5, 0x6E, 0x80, 0x01, 0x90, 0xF0, 0xF3, 0xE9,
    0xEC, 0xEF, 0x6E, 0x81, 0x03, 0x95, 0x08, 0xC8, 0xF4, 0xEF, 0xEE, 0xEF, 0x73, 0x80, 0x03, 0x88,
    0x72, 0x02, 0x08, 0xD6, 0x08, 0xE1, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04,
    0x20, 0xE5, 0xF6, 0xE5, 0xF2, 0xF3, 0xE5, 0x64, 0x81, 0x01, 0x8E, 0x08, 0xED, 0xE3, 0xF9, 0xF2,
    0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x2D, 0x73, 0x04, 0x09, 0x02, 0x09, 0x0D, 0x09, 0x21,
    0x09, 0x25, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x21, 0xE4, 0xE5, 0xF3,
    0xE3, 0xE5, 0xEE, 0xE4, 0xE5, 0xF2, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04,
    0xAA, 0x68, 0x80, 0x01, 0xA9, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xF7, 0x65, 0x74, 0x03, 0x09, 0x34,
    0x09, 0x4E, 0x09, 0x5C, 0x61, 0x82, 0x03, 0x97, 0x09, 0x3C, 0x09, 0x46, 0xF2, 0xED, 0xE5, 0xEE,
    0xE9, 0xE1, 0x6E, 0x80, 0x05, 0x38, 0xF4, 0xEF, 0xEE, 0xEF, 0x73, 0x80, 0x03, 0x89, 0x68, 0x81,
    0x00, 0xD0, 0x09, 0x54, 0xF3, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xF7, 0xF0, 0xE9, 0xEC, 0xE4, 0x65,
    0x81, 0x1E, 0xBC, 0x09, 0x65, 0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E, 0x1A, 0xF5, 0xF2, 0x6F,
    0x80, 0x20, 0xAC, 0xFA, 0x68, 0x82, 0x01, 0xB7, 0x09, 0x7C, 0x09, 0x84, 0xE3, 0xE1, 0xF2, 0xEF,
    0x6E, 0x80, 0x01, 0xEE, 0xF2, 0xE5, 0xF6, 0xE5, 0xF2, 0xF3, 0xE5, 0x64, 0x80, 0x01, 0xB8, 0x46,
    0x88, 0x00, 0x46, 0x09, 0xA3, 0x09, 0xAC, 0x09, 0xB8, 0x09, 0xD4, 0x09, 0xDB, 0x09, 0xF8, 0x0A,
    0x04, 0x0A, 0x0F, 0xE3, 0xE9, 0xF2, 0xE3, 0xEC, 0x65, 0x80, 0x24, 0xBB, 0xE4, 0xEF, 0xF4, 0xE1,
    0xE3, 0xE3, 0xE5, 0xEE, 0x74, 0x80, 0x1E, 0x1E, 0x65, 0x02, 0x09, 0xBE, 0x09, 0xCA, 0xE8, 0xE1,
    0xF2, 0xED, 0xE5, 0xEE, 0xE9, 0xE1, 0x6E, 0x80, 0x05, 0x56, 0xE9, 0xE3, 0xEF, 0xF0, 0xF4, 0xE9,
    0x63, 0x80, 0x03, 0xE4, 0xE8, 0xEF, 0xEF, 0x6B, 0x80, 0x01, 0x91, 0x69, 0x02, 0x09, 0xE1, 0x09,
    0xEE, 0xF4, 0xE1, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x72, 0xF6, 0xE5,
    0xF2, 0xEF, 0xED, 0xE1, 0x6E, 0x80, 0x21, 0x64, 0xED, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3,
    0x65, 0x80, 0xFF, 0x26, 0xEF, 0xF5, 0xF2, 0xF2, 0xEF, 0xED, 0xE1, 0x6E, 0x80, 0x21, 0x63, 0xF3,
    0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xF7, 0x66, 0x47, 0x8C, 0x00, 0x47, 0x0A, 0x33, 0x0A, 0x3D, 0x0A,
    0x6B, 0x0A, 0x73, 0x0A, 0xB0, 0x0A, 0xC1, 0x0A, 0xCD, 0x0B, 0x27, 0x0B, 0x34, 0x0B, 0x41, 0x0B,
    0x5A, 0x0B, 0x6B, 0xC2, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0x87, 0x61, 0x03, 0x0A,
    0x45, 0x0A, 0x4C, 0x0A, 0x5E, 0xE3, 0xF5, 0xF4, 0x65, 0x80, 0x01, 0xF4, 0xED, 0xED, 0x61, 0x81,
    0x03, 0x93, 0x0A, 0x54, 0xE1, 0xE6, 0xF2, 0xE9, 0xE3, 0xE1, 0x6E, 0x80, 0x01, 0x94, 0xEE, 0xE7,
    0xE9, 0xE1, 0xE3, 0xEF, 0xF0, 0xF4, 0xE9, 0x63, 0x80, 0x03, 0xEA, 0xE2, 0xF2, 0xE5, 0xF6, 0x65,
    0x80, 0x01, 0x1E, 0x63, 0x04, 0x0A, 0x7D, 0x0A, 0x84, 0x0A, 0x8D, 0x0A, 0xA3, 0xE1, 0xF2, 0xEF,
    0x6E, 0x80, 0x01, 0xE6, 0xE5, 0xE4, 0xE9, 0xEC, 0xEC, 0x61, 0x80, 0x01, 0x22, 0xE9, 0xF2, 0x63,
    0x02, 0x0A, 0x95, 0x0A, 0x9A, 0xEC, 0x65, 0x80, 0x24, 0xBC, 0xF5, 0xED, 0xE6, 0xEC, 0xE5, 0x78,
    0x80, 0x01, 0x1C, 0xEF, 0xED, 0xED, 0xE1, 0xE1, 0xE3, 0xE3, 0xE5, 0xEE, 0x74, 0x80, 0x01, 0x22,
    0xE4, 0xEF, 0x74, 0x81, 0x01, 0x20, 0x0A, 0xB8, 0xE1, 0xE3, 0xE3, 0xE5, 0xEE, 0x74, 0x80, 0x01,
    0x20, 0xE5, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x13, 0x68, 0x03, 0x0A,
    0xD5, 0x0A, 0xE2, 0x0B, 0x21, 0xE1, 0xE4, 0xE1, 0xF2, 0xED, 0xE5, 0xEE, 0xE9, 0xE1, 0x6E, 0x80,
    0x05, 0x42, 0x65, 0x03, 0x0A, 0xEA, 0x0A, 0xFF, 0x0B, 0x10, 0xED, 0xE9, 0xE4, 0xE4, 0xEC, 0xE5,
    0xE8, 0xEF, 0xEF, 0xEB, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x94, 0xF3,
    0xF4, 0xF2, 0xEF, 0xEB, 0xE5, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x92,
    0xF5, 0xF0, 0xF4, 0xF5, 0xF2, 0xEE, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04,
    0x90, 0xEF, 0xEF, 0x6B, 0x80, 0x01, 0x93, 0xE9, 0xED, 0xE1, 0xF2, 0xED, 0xE5, 0xEE, 0xE9, 0xE1,
    0x6E, 0x80, 0x05, 0x33, 0xEA, 0xE5, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04,
    0x03, 0x6D, 0x02, 0x0B, 0x47, 0x0B, 0x4F, 0xE1, 0xE3, 0xF2, 0xEF, 0x6E, 0x80, 0x1E, 0x20, 0xEF,
    0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80, 0xFF, 0x27, 0xF2, 0xE1, 0xF6, 0x65, 0x81, 0xF6,
    0xCE, 0x0B, 0x63, 0xF3, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xF7, 0x60, 0x73, 0x02, 0x0B, 0x71, 0x0B,
    0x81, 0xED, 0xE1, 0xEC, 0x6C, 0x81, 0xF7, 0x67, 0x0B, 0x7A, 0xE8, 0xEF, 0xEF, 0x6B, 0x80, 0x02,
    0x9B, 0xF4, 0xF2, 0xEF, 0xEB, 0x65, 0x80, 0x01, 0xE4, 0x48, 0x8C, 0x00, 0x48, 0x0B, 0xA5, 0x0B,
    0xBE, 0x0B, 0xC6, 0x0B, 0xD0, 0x0C, 0x11, 0x0C, 0x28, 0x0C, 0x4D, 0x0C, 0x75, 0x0C, 0x81, 0x0C,
    0x9D, 0x0C, 0xA5, 0x0C, 0xBD, 0xB1, 0xB8, 0x35, 0x03, 0x0B, 0xAF, 0x0B, 0xB4, 0x0B, 0xB9, 0xB3,
    0x33, 0x80, 0x25, 0xCF, 0xB4, 0x33, 0x80, 0x25, 0xAA, 0xB5, 0x31, 0x80, 0x25, 0xAB, 0xB2, 0xB2,
    0xB0, 0xB7, 0x33, 0x80, 0x25, 0xA1, 0xD0, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0xCB,
    0x61, 0x03, 0x0B, 0xD8, 0x0B, 0xEC, 0x0C, 0x00, 0xE1, 0xE2, 0xEB, 0xE8, 0xE1, 0xF3, 0xE9, 0xE1,
    0xEE, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0xA8, 0xE4, 0xE5, 0xF3, 0xE3,
    0xE5, 0xEE, 0xE4, 0xE5, 0xF2, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0xB2,
    0xF2, 0xE4, 0xF3, 0xE9, 0xE7, 0xEE, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04,
    0x2A, 0x62, 0x02, 0x0C, 0x17, 0x0C, 0x1C, 0xE1, 0x72, 0x80, 0x01, 0x26, 0xF2, 0xE5, 0xF6, 0xE5,
    0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E, 0x2A, 0x63, 0x02, 0x0C, 0x2E, 0x0C, 0x37, 0xE5, 0xE4,
    0xE9, 0xEC, 0xEC, 0x61, 0x80, 0x1E, 0x28, 0xE9, 0xF2, 0x63, 0x02, 0x0C, 0x3F, 0x0C, 0x44, 0xEC,
    0x65, 0x80, 0x24, 0xBD, 0xF5, 0xED, 0xE6, 0xEC, 0xE5, 0x78, 0x80, 0x01, 0x24, 0x64, 0x02, 0x0C,
    0x53, 0x0C, 0x5D, 0xE9, 0xE5, 0xF2, 0xE5, 0xF3, 0xE9, 0x73, 0x80, 0x1E, 0x26, 0xEF, 0x74, 0x02,
    0x0C, 0x64, 0x0C, 0x6D, 0xE1, 0xE3, 0xE3, 0xE5, 0xEE, 0x74, 0x80, 0x1E, 0x22, 0xE2, 0xE5, 0xEC,
    0xEF, 0x77, 0x80, 0x1E, 0x24, 0xED, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80, 0xFF,
    0x28, 0x6F, 0x02, 0x0C, 0x87, 0x0C, 0x92, 0xE1, 0xF2, 0xED, 0xE5, 0xEE, 0xE9, 0xE1, 0x6E, 0x80,
    0x05, 0x40, 0xF2, 0xE9, 0xE3, 0xEF, 0xF0, 0xF4, 0xE9, 0x63, 0x80, 0x03, 0xE8, 0xF3, 0xED, 0xE1,
    0xEC, 0x6C, 0x80, 0xF7, 0x68, 0xF5, 0xEE, 0xE7, 0xE1, 0xF2, 0xF5, 0xED, 0xEC, 0xE1, 0xF5, 0x74,
    0x81, 0xF6, 0xCF, 0x0C, 0xB5, 0xF3, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xF6, 0xF8, 0xFA, 0xF3, 0xF1,
    0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0x90, 0x49, 0x92, 0x00, 0x49, 0x0C, 0xEF, 0x0C, 0xFB, 0x0C,
    0xFF, 0x0D, 0x0B, 0x0D, 0x1D, 0x0D, 0x25, 0x0D, 0x5E, 0x0D, 0xB5, 0x0D, 0xD6, 0x0D, 0xE0, 0x0D,
    0xF2, 0x0D, 0xFE, 0x0E, 0x30, 0x0E, 0x56, 0x0E, 0x63, 0x0E, 0xA6, 0x0E, 0xBB, 0x0E, 0xCD, 0xC1,
    0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x2F, 0x4A, 0x80, 0x01, 0x32, 0xD5,
    0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x2E, 0xE1, 0xE3, 0xF5, 0xF4, 0x65,
    0x81, 0x00, 0xCD, 0x0D, 0x15, 0xF3, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xF7, 0xED, 0xE2, 0xF2, 0xE5,
    0xF6, 0x65, 0x80, 0x01, 0x2C, 0x63, 0x03, 0x0D, 0x2D, 0x0D, 0x34, 0x0D, 0x54, 0xE1, 0xF2, 0xEF,
    0x6E, 0x80, 0x01, 0xCF, 0xE9, 0xF2, 0x63, 0x02, 0x0D, 0x3C, 0x0D, 0x41, 0xEC, 0x65, 0x80, 0x24,
    0xBE, 0xF5, 0xED, 0xE6, 0xEC, 0xE5, 0x78, 0x81, 0x00, 0xCE, 0x0D, 0x4C, 0xF3, 0xED, 0xE1, 0xEC,
    0x6C, 0x80, 0xF7, 0xEE, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x06, 0x64, 0x03,
    0x0D, 0x66, 0x0D, 0x70, 0x0D, 0x9B, 0xE2, 0xEC, 0xE7, 0xF2, 0xE1, 0xF6, 0x65, 0x80, 0x02, 0x08,
    0xE9, 0xE5, 0xF2, 0xE5, 0xF3, 0xE9, 0x73, 0x83, 0x00, 0xCF, 0x0D, 0x80, 0x0D, 0x88, 0x0D, 0x93,
    0xE1, 0xE3, 0xF5, 0xF4, 0x65, 0x80, 0x1E, 0x2E, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63,
    0x80, 0x04, 0xE4, 0xF3, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xF7, 0xEF, 0xEF, 0x74, 0x82, 0x01, 0x30,
    0x0D, 0xA4, 0x0D, 0xAD, 0xE1, 0xE3, 0xE3, 0xE5, 0xEE, 0x74, 0x80, 0x01, 0x30, 0xE2, 0xE5, 0xEC,
    0xEF, 0x77, 0x80, 0x1E, 0xCA, 0x65, 0x02, 0x0D, 0xBB, 0x0D, 0xCB, 0xE2, 0xF2, 0xE5, 0xF6, 0xE5,
    0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0xD6, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC,
    0xEC, 0xE9, 0x63, 0x80, 0x04, 0x15, 0xE6, 0xF2, 0xE1, 0xEB, 0xF4, 0xF5, 0x72, 0x80, 0x21, 0x11,
    0xE7, 0xF2, 0xE1, 0xF6, 0x65, 0x81, 0x00, 0xCC, 0x0D, 0xEA, 0xF3, 0xED, 0xE1, 0xEC, 0x6C, 0x80,
    0xF7, 0xEC, 0xE8, 0xEF, 0xEF, 0xEB, 0xE1, 0xE2, 0xEF, 0xF6, 0x65, 0x80, 0x1E, 0xC8, 0x69, 0x03,
    0x0E, 0x06, 0x0E, 0x11, 0x0E, 0x20, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04,
    0x18, 0xEE, 0xF6, 0xE5, 0xF2, 0xF4, 0xE5, 0xE4, 0xE2, 0xF2, 0xE5, 0xF6, 0x65, 0x80, 0x02, 0x0A,
    0xF3, 0xE8, 0xEF, 0xF2, 0xF4, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x19,
    0x6D, 0x02, 0x0E, 0x36, 0x0E, 0x4B, 0xE1, 0xE3, 0xF2, 0xEF, 0x6E, 0x81, 0x01, 0x2A, 0x0E, 0x40,
    0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0xE2, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0,
    0xE1, 0xE3, 0x65, 0x80, 0xFF, 0x29, 0xEE, 0xE9, 0xE1, 0xF2, 0xED, 0xE5, 0xEE, 0xE9, 0xE1, 0x6E,
    0x80, 0x05, 0x3B, 0x6F, 0x03, 0x0E, 0x6B, 0x0E, 0x76, 0x0E, 0x7E, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC,
    0xEC, 0xE9, 0x63, 0x80, 0x04, 0x01, 0xE7, 0xEF, 0xEE, 0xE5, 0x6B, 0x80, 0x01, 0x2E, 0xF4, 0x61,
    0x83, 0x03, 0x99, 0x0E, 0x89, 0x0E, 0x93, 0x0E, 0x9E, 0xE1, 0xE6, 0xF2, 0xE9, 0xE3, 0xE1, 0x6E,
    0x80, 0x01, 0x96, 0xE4, 0xE9, 0xE5, 0xF2, 0xE5, 0xF3, 0xE9, 0x73, 0x80, 0x03, 0xAA, 0xF4, 0xEF,
    0xEE, 0xEF, 0x73, 0x80, 0x03, 0x8A, 0x73, 0x02, 0x0E, 0xAC, 0x0E, 0xB3, 0xED, 0xE1, 0xEC, 0x6C,
    0x80, 0xF7, 0x69, 0xF4, 0xF2, 0xEF, 0xEB, 0x65, 0x80, 0x01, 0x97, 0xF4, 0xE9, 0xEC, 0xE4, 0x65,
    0x81, 0x01, 0x28, 0x0E, 0xC5, 0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E, 0x2C, 0xFA, 0xE8, 0xE9,
    0xF4, 0xF3, 0x61, 0x02, 0x0E, 0xD8, 0x0E, 0xE3, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63,
    0x80, 0x04, 0x74, 0xE4, 0xE2, 0xEC, 0xE7, 0xF2, 0xE1, 0xF6, 0xE5, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC,
    0xEC, 0xE9, 0x63, 0x80, 0x04, 0x76, 0x4A, 0x86, 0x00, 0x4A, 0x0F, 0x06, 0x0F, 0x12, 0x0F, 0x29,
    0x0F, 0x35, 0x0F, 0x43, 0x0F, 0x4F, 0xE1, 0xE1, 0xF2, 0xED, 0xE5, 0xEE, 0xE9, 0xE1, 0x6E, 0x80,
    0x05, 0x41, 0xE3, 0xE9, 0xF2, 0x63, 0x02, 0x0F, 0x1B, 0x0F, 0x20, 0xEC, 0x65, 0x80, 0x24, 0xBF,
    0xF5, 0xED, 0xE6, 0xEC, 0xE5, 0x78, 0x80, 0x01, 0x34, 0xE5, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC,
    0xE9, 0x63, 0x80, 0x04, 0x08, 0xE8, 0xE5, 0xE8, 0xE1, 0xF2, 0xED, 0xE5, 0xEE, 0xE9, 0xE1, 0x6E,
    0x80, 0x05, 0x4B, 0xED, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80, 0xFF, 0x2A, 0xF3,
    0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xF7, 0x6A, 0x4B, 0x8C, 0x00, 0x4B, 0x0F, 0x73, 0x0F, 0x7D, 0x0F,
    0x87, 0x10, 0x12, 0x10, 0x41, 0x10, 0x4C, 0x10, 0x6A, 0x10, 0x8F, 0x10, 0x9C, 0x10, 0xA8, 0x10,
    0xB4, 0x10, 0xD0, 0xC2, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0x85, 0xCB, 0xF3, 0xF1,
    0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0xCD, 0x61, 0x07, 0x0F, 0x97, 0x0F, 0xA9, 0x0F, 0xBF, 0x0F,
    0xD3, 0x0F, 0xE2, 0x0F, 0xE8, 0x0F, 0xF9, 0xE2, 0xE1, 0xF3, 0xE8, 0xEB, 0xE9, 0xF2, 0xE3, 0xF9,
    0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0xA0, 0x63, 0x02, 0x0F, 0xAF, 0x0F, 0xB5, 0xF5,
    0xF4, 0x65, 0x80, 0x1E, 0x30, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x1A, 0xE4,
    0xE5, 0xF3, 0xE3, 0xE5, 0xEE, 0xE4, 0xE5, 0xF2, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63,
    0x80, 0x04, 0x9A, 0xE8, 0xEF, 0xEF, 0xEB, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80,
    0x04, 0xC3, 0xF0, 0xF0, 0x61, 0x80, 0x03, 0x9A, 0xF3, 0xF4, 0xF2, 0xEF, 0xEB, 0xE5, 0xE3, 0xF9,
    0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x9E, 0xF6, 0xE5, 0xF2, 0xF4, 0xE9, 0xE3, 0xE1,
    0xEC, 0xF3, 0xF4, 0xF2, 0xEF, 0xEB, 0xE5, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80,
    0x04, 0x9C, 0x63, 0x04, 0x10, 0x1C, 0x10, 0x23, 0x10, 0x2C, 0x10, 0x34, 0xE1, 0xF2, 0xEF, 0x6E,
    0x80, 0x01, 0xE8, 0xE5, 0xE4, 0xE9, 0xEC, 0xEC, 0x61, 0x80, 0x01, 0x36, 0xE9, 0xF2, 0xE3, 0xEC,
    0x65, 0x80, 0x24, 0xC0, 0xEF, 0xED, 0xED, 0xE1, 0xE1, 0xE3, 0xE3, 0xE5, 0xEE, 0x74, 0x80, 0x01,
    0x36, 0xE4, 0xEF, 0xF4, 0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E, 0x32, 0x65, 0x02, 0x10, 0x52,
    0x10, 0x5E, 0xE8, 0xE1, 0xF2, 0xED, 0xE5, 0xEE, 0xE9, 0xE1, 0x6E, 0x80, 0x05, 0x54, 0xEE, 0xE1,
    0xF2, 0xED, 0xE5, 0xEE, 0xE9, 0xE1, 0x6E, 0x80, 0x05, 0x3F, 0x68, 0x03, 0x10, 0x72, 0x10, 0x7E,
    0x10, 0x89, 0xE1, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x25, 0xE5, 0xE9,
    0xE3, 0xEF, 0xF0, 0xF4, 0xE9, 0x63, 0x80, 0x03, 0xE6, 0xEF, 0xEF, 0x6B, 0x80, 0x01, 0x98, 0xEA,
    0xE5, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x0C, 0xEC, 0xE9, 0xEE, 0xE5,
    0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E, 0x34, 0xED, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3,
    0x65, 0x80, 0xFF, 0x2B, 0xEF, 0xF0, 0xF0, 0x61, 0x02, 0x10, 0xBD, 0x10, 0xC8, 0xE3, 0xF9, 0xF2,
    0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x80, 0xE7, 0xF2, 0xE5, 0xE5, 0x6B, 0x80, 0x03, 0xDE,
    0x73, 0x02, 0x10, 0xD6, 0x10, 0xE2, 0xE9, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80,
    0x04, 0x6E, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xF7, 0x6B, 0x4C, 0x8A, 0x00, 0x4C, 0x11, 0x01, 0x11,
    0x05, 0x11, 0x09, 0x11, 0x1D, 0x11, 0x5F, 0x11, 0x85, 0x11, 0x93, 0x11, 0xA5, 0x11, 0xB1, 0x11,
    0xBD, 0x4A, 0x80, 0x01, 0xC7, 0x4C, 0x80, 0xF6, 0xBF, 0x61, 0x02, 0x11, 0x0F, 0x11, 0x16, 0xE3,
    0xF5, 0xF4, 0x65, 0x80, 0x01, 0x39, 0xED, 0xE2, 0xE4, 0x61, 0x80, 0x03, 0x9B, 0x63, 0x04, 0x11,
    0x27, 0x11, 0x2E, 0x11, 0x37, 0x11, 0x52, 0xE1, 0xF2, 0xEF, 0x6E, 0x80, 0x01, 0x3D, 0xE5, 0xE4,
    0xE9, 0xEC, 0xEC, 0x61, 0x80, 0x01, 0x3B, 0xE9, 0xF2, 0x63, 0x02, 0x11, 0x3F, 0x11, 0x44, 0xEC,
    0x65, 0x80, 0x24, 0xC1, 0xF5, 0xED, 0xE6, 0xEC, 0xE5, 0xF8, 0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80,
    0x1E, 0x3C, 0xEF, 0xED, 0xED, 0xE1, 0xE1, 0xE3, 0xE3, 0xE5, 0xEE, 0x74, 0x80, 0x01, 0x3B, 0xE4,
    0xEF, 0x74, 0x82, 0x01, 0x3F, 0x11, 0x69, 0x11, 0x72, 0xE1, 0xE3, 0xE3, 0xE5, 0xEE, 0x74, 0x80,
    0x01, 0x3F, 0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x81, 0x1E, 0x36, 0x11, 0x7C, 0xED, 0xE1, 0xE3, 0xF2,
    0xEF, 0x6E, 0x80, 0x1E, 0x38, 0xE9, 0xF7, 0xEE, 0xE1, 0xF2, 0xED, 0xE5, 0xEE, 0xE9, 0xE1, 0x6E,
    0x80, 0x05, 0x3C, 0x6A, 0x81, 0x01, 0xC8, 0x11, 0x99, 0xE5, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC,
    0xE9, 0x63, 0x80, 0x04, 0x09, 0xEC, 0xE9, 0xEE, 0xE5, 0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E,
    0x3A, 0xED, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80, 0xFF, 0x2C, 0x73, 0x02, 0x11,
    0xC3, 0x11, 0xD4, 0xEC, 0xE1, 0xF3, 0x68, 0x81, 0x01, 0x41, 0x11, 0xCC, 0xF3, 0xED, 0xE1, 0xEC,
    0x6C, 0x80, 0xF6, 0xF9, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xF7, 0x6C, 0x4D, 0x89, 0x00, 0x4D, 0x11,
    0xF1, 0x11, 0xFB, 0x12, 0x18, 0x12, 0x21, 0x12, 0x3A, 0x12, 0x47, 0x12, 0x53, 0x12, 0x5B, 0x12,
    0x64, 0xC2, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0x86, 0xE1, 0x63, 0x02, 0x12, 0x02,
    0x12, 0x12, 0xF2, 0xEF, 0x6E, 0x81, 0xF6, 0xD0, 0x12, 0x0A, 0xF3, 0xED, 0xE1, 0xEC, 0x6C, 0x80,
    0xF7, 0xAF, 0xF5, 0xF4, 0x65, 0x80, 0x1E, 0x3E, 0xE3, 0xE9, 0xF2, 0xE3, 0xEC, 0x65, 0x80, 0x24,
    0xC2, 0xE4, 0xEF, 0x74, 0x02, 0x12, 0x29, 0x12, 0x32, 0xE1, 0xE3, 0xE3, 0xE5, 0xEE, 0x74, 0x80,
    0x1E, 0x40, 0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E, 0x42, 0xE5, 0xEE, 0xE1, 0xF2, 0xED, 0xE5,
    0xEE, 0xE9, 0xE1, 0x6E, 0x80, 0x05, 0x44, 0xED, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65,
    0x80, 0xFF, 0x2D, 0xF3, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xF7, 0x6D, 0xF4, 0xF5, 0xF2, 0xEE, 0xE5,
    0x64, 0x80, 0x01, 0x9C, 0x75, 0x80, 0x03, 0x9C, 0x4E, 0x8D, 0x00, 0x4E, 0x12, 0x86, 0x12, 0x8A,
    0x12, 0x92, 0x12, 0xD4, 0x12, 0xED, 0x12, 0xF8, 0x13, 0x03, 0x13, 0x15, 0x13, 0x21, 0x13, 0x2D,
    0x13, 0x3A, 0x13, 0x42, 0x13, 0x54, 0x4A, 0x80, 0x01, 0xCA, 0xE1, 0xE3, 0xF5, 0xF4, 0x65, 0x80,
    0x01, 0x43, 0x63, 0x04, 0x12, 0x9C, 0x12, 0xA3, 0x12, 0xAC, 0x12, 0xC7, 0xE1, 0xF2, 0xEF, 0x6E,
    0x80, 0x01, 0x47, 0xE5, 0xE4, 0xE9, 0xEC, 0xEC, 0x61, 0x80, 0x01, 0x45, 0xE9, 0xF2, 0x63, 0x02,
    0x12, 0xB4, 0x12, 0xB9, 0xEC, 0x65, 0x80, 0x24, 0xC3, 0xF5, 0xED, 0xE6, 0xEC, 0xE5, 0xF8, 0xE2,
    0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E, 0x4A, 0xEF, 0xED, 0xED, 0xE1, 0xE1, 0xE3, 0xE3, 0xE5, 0xEE,
    0x74, 0x80, 0x01, 0x45, 0xE4, 0xEF, 0x74, 0x02, 0x12, 0xDC, 0x12, 0xE5, 0xE1, 0xE3, 0xE3, 0xE5,
    0xEE, 0x74, 0x80, 0x1E, 0x44, 0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E, 0x46, 0xE8, 0xEF, 0xEF,
    0xEB, 0xEC, 0xE5, 0xE6, 0x74, 0x80, 0x01, 0x9D, 0xE9, 0xEE, 0xE5, 0xF2, 0xEF, 0xED, 0xE1, 0x6E,
    0x80, 0x21, 0x68, 0x6A, 0x81, 0x01, 0xCB, 0x13, 0x09, 0xE5, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC,
    0xE9, 0x63, 0x80, 0x04, 0x0A, 0xEC, 0xE9, 0xEE, 0xE5, 0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E,
    0x48, 0xED, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80, 0xFF, 0x2E, 0xEF, 0xF7, 0xE1,
    0xF2, 0xED, 0xE5, 0xEE, 0xE9, 0xE1, 0x6E, 0x80, 0x05, 0x46, 0xF3, 0xED, 0xE1, 0xEC, 0x6C, 0x80,
    0xF7, 0x6E, 0xF4, 0xE9, 0xEC, 0xE4, 0x65, 0x81, 0x00, 0xD1, 0x13, 0x4C, 0xF3, 0xED, 0xE1, 0xEC,
    0x6C, 0x80, 0xF7, 0xF1, 0x75, 0x80, 0x03, 0x9D, 0x4F, 0x8D, 0x00, 0x4F, 0x13, 0x76, 0x13, 0x84,
    0x13, 0x96, 0x13, 0xCB, 0x14, 0x4E, 0x14, 0x98, 0x14, 0xBB, 0x15, 0x30, 0x15, 0x45, 0x15, 0xD5,
    0x15, 0xDF, 0x15, 0xFE, 0x16, 0x35, 0x45, 0x81, 0x01, 0x52, 0x13, 0x7C, 0xF3, 0xED, 0xE1, 0xEC,
    0x6C, 0x80, 0xF6, 0xFA, 0xE1, 0xE3, 0xF5, 0xF4, 0x65, 0x81, 0x00, 0xD3, 0x13, 0x8E, 0xF3, 0xED,
    0xE1, 0xEC, 0x6C, 0x80, 0xF7, 0xF3, 0x62, 0x02, 0x13, 0x9C, 0x13, 0xC4, 0xE1, 0xF2, 0xF2, 0xE5,
    0x64, 0x02, 0x13, 0xA6, 0x13, 0xB1, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04,
    0xE8, 0xE4, 0xE9, 0xE5, 0xF2, 0xE5, 0xF3, 0xE9, 0xF3, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9,
    0x63, 0x80, 0x04, 0xEA, 0xF2, 0xE5, 0xF6, 0x65, 0x80, 0x01, 0x4E, 0x63, 0x04, 0x13, 0xD5, 0x13,
    0xDC, 0x13, 0xEB, 0x14, 0x44, 0xE1, 0xF2, 0xEF, 0x6E, 0x80, 0x01, 0xD1, 0xE5, 0xEE, 0xF4, 0xE5,
    0xF2, 0xE5, 0xE4, 0xF4, 0xE9, 0xEC, 0xE4, 0x65, 0x80, 0x01, 0x9F, 0xE9, 0xF2, 0x63, 0x02, 0x13,
    0xF3, 0x13, 0xF8, 0xEC, 0x65, 0x80, 0x24, 0xC4, 0xF5, 0xED, 0xE6, 0xEC, 0xE5, 0x78, 0x86, 0x00,
    0xD4, 0x14, 0x0D, 0x14, 0x15, 0x14, 0x20, 0x14, 0x28, 0x14, 0x34, 0x14, 0x3C, 0xE1, 0xE3, 0xF5,
    0xF4, 0x65, 0x80, 0x1E, 0xD0, 0xE4, 0xEF, 0xF4, 0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E, 0xD8,
    0xE7, 0xF2, 0xE1, 0xF6, 0x65, 0x80, 0x1E, 0xD2, 0xE8, 0xEF, 0xEF, 0xEB, 0xE1, 0xE2, 0xEF, 0xF6,
    0x65, 0x80, 0x1E, 0xD4, 0xF3, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xF7, 0xF4, 0xF4, 0xE9, 0xEC, 0xE4,
    0x65, 0x80, 0x1E, 0xD6, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x1E, 0x64, 0x03,
    0x14, 0x56, 0x14, 0x6D, 0x14, 0x8E, 0xE2, 0x6C, 0x02, 0x14, 0x5D, 0x14, 0x65, 0xE1, 0xE3, 0xF5,
    0xF4, 0x65, 0x80, 0x01, 0x50, 0xE7, 0xF2, 0xE1, 0xF6, 0x65, 0x80, 0x02, 0x0C, 0xE9, 0xE5, 0xF2,
    0xE5, 0xF3, 0xE9, 0x73, 0x82, 0x00, 0xD6, 0x14, 0x7B, 0x14, 0x86, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC,
    0xEC, 0xE9, 0x63, 0x80, 0x04, 0xE6, 0xF3, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xF7, 0xF6, 0xEF, 0xF4,
    0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E, 0xCC, 0x67, 0x02, 0x14, 0x9E, 0x14, 0xAA, 0xEF, 0xEE,
    0xE5, 0xEB, 0xF3, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xF6, 0xFB, 0xF2, 0xE1, 0xF6, 0x65, 0x81, 0x00,
    0xD2, 0x14, 0xB3, 0xF3, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xF7, 0xF2, 0x68, 0x04, 0x14, 0xC5, 0x14,
    0xD0, 0x14, 0xD4, 0x15, 0x22, 0xE1, 0xF2, 0xED, 0xE5, 0xEE, 0xE9, 0xE1, 0x6E, 0x80, 0x05, 0x55,
    0x6D, 0x80, 0x21, 0x26, 0x6F, 0x02, 0x14, 0xDA, 0x14, 0xE4, 0xEF, 0xEB, 0xE1, 0xE2, 0xEF, 0xF6,
    0x65, 0x80, 0x1E, 0xCE, 0xF2, 0x6E, 0x85, 0x01, 0xA0, 0x14, 0xF3, 0x14, 0xFB, 0x15, 0x06, 0x15,
    0x0E, 0x15, 0x1A, 0xE1, 0xE3, 0xF5, 0xF4, 0x65, 0x80, 0x1E, 0xDA, 0xE4, 0xEF, 0xF4, 0xE2, 0xE5,
    0xEC, 0xEF, 0x77, 0x80, 0x1E, 0xE2, 0xE7, 0xF2, 0xE1, 0xF6, 0x65, 0x80, 0x1E, 0xDC, 0xE8, 0xEF,
    0xEF, 0xEB, 0xE1, 0xE2, 0xEF, 0xF6, 0x65, 0x80, 0x1E, 0xDE, 0xF4, 0xE9, 0xEC, 0xE4, 0x65, 0x80,
    0x1E, 0xE0, 0xF5, 0xEE, 0xE7, 0xE1, 0xF2, 0xF5, 0xED, 0xEC, 0xE1, 0xF5, 0x74, 0x80, 0x01, 0x50,
    0x69, 0x81, 0x01, 0xA2, 0x15, 0x36, 0xEE, 0xF6, 0xE5, 0xF2, 0xF4, 0xE5, 0xE4, 0xE2, 0xF2, 0xE5,
    0xF6, 0x65, 0x80, 0x02, 0x0E, 0x6D, 0x04, 0x15, 0x4F, 0x15, 0x6B, 0x15, 0xB8, 0x15, 0xCA, 0xE1,
    0xE3, 0xF2, 0xEF, 0x6E, 0x82, 0x01, 0x4C, 0x15, 0x5B, 0x15, 0x63, 0xE1, 0xE3, 0xF5, 0xF4, 0x65,
    0x80, 0x1E, 0x52, 0xE7, 0xF2, 0xE1, 0xF6, 0x65, 0x80, 0x1E, 0x50, 0xE5, 0xE7, 0x61, 0x84, 0x21,
    0x26, 0x15, 0x79, 0x15, 0x84, 0x15, 0x8C, 0x15, 0x9C, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9,
    0x63, 0x80, 0x04, 0x60, 0xE7, 0xF2, 0xE5, 0xE5, 0x6B, 0x80, 0x03, 0xA9, 0xF2, 0xEF, 0xF5, 0xEE,
    0xE4, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x7A, 0x74, 0x02, 0x15, 0xA2,
    0x15, 0xB1, 0xE9, 0xF4, 0xEC, 0xEF, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04,
    0x7C, 0xEF, 0xEE, 0xEF, 0x73, 0x80, 0x03, 0x8F, 0xE9, 0xE3, 0xF2, 0xEF, 0x6E, 0x81, 0x03, 0x9F,
    0x15, 0xC2, 0xF4, 0xEF, 0xEE, 0xEF, 0x73, 0x80, 0x03, 0x8C, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1,
    0xE3, 0x65, 0x80, 0xFF, 0x2F, 0xEE, 0xE5, 0xF2, 0xEF, 0xED, 0xE1, 0x6E, 0x80, 0x21, 0x60, 0x6F,
    0x02, 0x15, 0xE5, 0x15, 0xF8, 0xE7, 0xEF, 0xEE, 0xE5, 0x6B, 0x81, 0x01, 0xEA, 0x15, 0xEF, 0xED,
    0xE1, 0xE3, 0xF2, 0xEF, 0x6E, 0x80, 0x01, 0xEC, 0xF0, 0xE5, 0x6E, 0x80, 0x01, 0x86, 0x73, 0x03,
    0x16, 0x06, 0x16, 0x21, 0x16, 0x28, 0xEC, 0xE1, 0xF3, 0x68, 0x82, 0x00, 0xD8, 0x16, 0x11, 0x16,
    0x19, 0xE1, 0xE3, 0xF5, 0xF4, 0x65, 0x80, 0x01, 0xFE, 0xF3, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xF7,
    0xF8, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xF7, 0x6F, 0xF4, 0xF2, 0xEF, 0xEB, 0xE5, 0xE1, 0xE3, 0xF5,
    0xF4, 0x65, 0x80, 0x01, 0xFE, 0x74, 0x02, 0x16, 0x3B, 0x16, 0x46, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC,
    0xEC, 0xE9, 0x63, 0x80, 0x04, 0x7E, 0xE9, 0xEC, 0xE4, 0x65, 0x83, 0x00, 0xD5, 0x16, 0x53, 0x16,
    0x5B, 0x16, 0x66, 0xE1, 0xE3, 0xF5, 0xF4, 0x65, 0x80, 0x1E, 0x4C, 0xE4, 0xE9, 0xE5, 0xF2, 0xE5,
    0xF3, 0xE9, 0x73, 0x80, 0x1E, 0x4E, 0xF3, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xF7, 0xF5, 0x50, 0x88,
    0x00, 0x50, 0x16, 0x82, 0x16, 0x8A, 0x16, 0x93, 0x16, 0x9F, 0x16, 0xD3, 0x16, 0xE3, 0x16, 0xF6,
    0x17, 0x02, 0xE1, 0xE3, 0xF5, 0xF4, 0x65, 0x80, 0x1E, 0x54, 0xE3, 0xE9, 0xF2, 0xE3, 0xEC, 0x65,
    0x80, 0x24, 0xC5, 0xE4, 0xEF, 0xF4, 0xE1, 0xE3, 0xE3, 0xE5, 0xEE, 0x74, 0x80, 0x1E, 0x56, 0x65,
    0x03, 0x16, 0xA7, 0x16, 0xB2, 0x16, 0xBE, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80,
    0x04, 0x1F, 0xE8, 0xE1, 0xF2, 0xED, 0xE5, 0xEE, 0xE9, 0xE1, 0x6E, 0x80, 0x05, 0x4A, 0xED, 0xE9,
    0xE4, 0xE4, 0xEC, 0xE5, 0xE8, 0xEF, 0xEF, 0xEB, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63,
    0x80, 0x04, 0xA6, 0x68, 0x02, 0x16, 0xD9, 0x16, 0xDD, 0x69, 0x80, 0x03, 0xA6, 0xEF, 0xEF, 0x6B,
    0x80, 0x01, 0xA4, 0x69, 0x81, 0x03, 0xA0, 0x16, 0xE9, 0xF7, 0xF2, 0xE1, 0xF2, 0xED, 0xE5, 0xEE,
    0xE9, 0xE1, 0x6E, 0x80, 0x05, 0x53, 0xED, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80,
    0xFF, 0x30, 0x73, 0x02, 0x17, 0x08, 0x17, 0x19, 0x69, 0x81, 0x03, 0xA8, 0x17, 0x0E, 0xE3, 0xF9,
    0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x70, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xF7, 0x70,
    0x51, 0x83, 0x00, 0x51, 0x17, 0x2A, 0x17, 0x33, 0x17, 0x3F, 0xE3, 0xE9, 0xF2, 0xE3, 0xEC, 0x65,
    0x80, 0x24, 0xC6, 0xED, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80, 0xFF, 0x31, 0xF3,
    0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xF7, 0x71, 0x52, 0x8A, 0x00, 0x52, 0x17, 0x5F, 0x17, 0x77, 0x17,
    0xA6, 0x17, 0xD9, 0x17, 0xE6, 0x17, 0xF0, 0x17, 0xF5, 0x18, 0x13, 0x18, 0x1F, 0x18, 0x2B, 0x61,
    0x02, 0x17, 0x65, 0x17, 0x70, 0xE1, 0xF2, 0xED, 0xE5, 0xEE, 0xE9, 0xE1, 0x6E, 0x80, 0x05, 0x4C,
    0xE3, 0xF5, 0xF4, 0x65, 0x80, 0x01, 0x54, 0x63, 0x04, 0x17, 0x81, 0x17, 0x88, 0x17, 0x91, 0x17,
    0x99, 0xE1, 0xF2, 0xEF, 0x6E, 0x80, 0x01, 0x58, 0xE5, 0xE4, 0xE9, 0xEC, 0xEC, 0x61, 0x80, 0x01,
    0x56, 0xE9, 0xF2, 0xE3, 0xEC, 0x65, 0x80, 0x24, 0xC7, 0xEF, 0xED, 0xED, 0xE1, 0xE1, 0xE3, 0xE3,
    0xE5, 0xEE, 0x74, 0x80, 0x01, 0x56, 0x64, 0x02, 0x17, 0xAC, 0x17, 0xB6, 0xE2, 0xEC, 0xE7, 0xF2,
    0xE1, 0xF6, 0x65, 0x80, 0x02, 0x10, 0xEF, 0x74, 0x02, 0x17, 0xBD, 0x17, 0xC6, 0xE1, 0xE3, 0xE3,
    0xE5, 0xEE, 0x74, 0x80, 0x1E, 0x58, 0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x81, 0x1E, 0x5A, 0x17, 0xD0,
    0xED, 0xE1, 0xE3, 0xF2, 0xEF, 0x6E, 0x80, 0x1E, 0x5C, 0xE5, 0xE8, 0xE1, 0xF2, 0xED, 0xE5, 0xEE,
    0xE9, 0xE1, 0x6E, 0x80, 0x05, 0x50, 0xE6, 0xF2, 0xE1, 0xEB, 0xF4, 0xF5, 0x72, 0x80, 0x21, 0x1C,
    0xE8, 0x6F, 0x80, 0x03, 0xA1, 0xE9, 0x6E, 0x02, 0x17, 0xFC, 0x18, 0x05, 0xE7, 0xF3, 0xED, 0xE1,
    0xEC, 0x6C, 0x80, 0xF6, 0xFC, 0xF6, 0xE5, 0xF2, 0xF4, 0xE5, 0xE4, 0xE2, 0xF2, 0xE5, 0xF6, 0x65,
    0x80, 0x02, 0x12, 0xEC, 0xE9, 0xEE, 0xE5, 0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E, 0x5E, 0xED,
    0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80, 0xFF, 0x32, 0xF3, 0xED, 0xE1, 0xEC, 0x6C,
    0x81, 0xF7, 0x72, 0x18, 0x35, 0xE9, 0xEE, 0xF6, 0xE5, 0xF2, 0xF4, 0xE5, 0x64, 0x81, 0x02, 0x81,
    0x18, 0x42, 0xF3, 0xF5, 0xF0, 0xE5, 0xF2, 0xE9, 0xEF, 0x72, 0x80, 0x02, 0xB6, 0x53, 0x8B, 0x00,
    0x53, 0x18, 0x67, 0x1A, 0x11, 0x1A, 0x37, 0x1A, 0xB6, 0x1A, 0xDD, 0x1A, 0xFA, 0x1B, 0x54, 0x1B,
    0x69, 0x1B, 0x75, 0x1B, 0x87, 0x1B, 0x8F, 0x46, 0x06, 0x18, 0x75, 0x18, 0xD1, 0x18, 0xF1, 0x19,
    0x4D, 0x19, 0x77, 0x19, 0xDD, 0x30, 0x09, 0x18, 0x89, 0x18, 0x91, 0x18, 0x99, 0x18, 0xA1, 0x18,
    0xA9, 0x18, 0xB1, 0x18, 0xB9, 0x18, 0xC1, 0x18, 0xC9, 0xB1, 0xB0, 0xB0, 0xB0, 0x30, 0x80, 0x25,
    0x0C, 0xB2, 0xB0, 0xB0, 0xB0, 0x30, 0x80, 0x25, 0x14, 0xB3, 0xB0, 0xB0, 0xB0, 0x30, 0x80, 0x25,
    0x10, 0xB4, 0xB0, 0xB0, 0xB0, 0x30, 0x80, 0x25, 0x18, 0xB5, 0xB0, 0xB0, 0xB0, 0x30, 0x80, 0x25,
    0x3C, 0xB6, 0xB0, 0xB0, 0xB0, 0x30, 0x80, 0x25, 0x2C, 0xB7, 0xB0, 0xB0, 0xB0, 0x30, 0x80, 0x25,
    0x34, 0xB8, 0xB0, 0xB0, 0xB0, 0x30, 0x80, 0x25, 0x1C, 0xB9, 0xB0, 0xB0, 0xB0, 0x30, 0x80, 0x25,
    0x24, 0x31, 0x03, 0x18, 0xD9, 0x18, 0xE1, 0x18, 0xE9, 0xB0, 0xB0, 0xB0, 0xB0, 0x30, 0x80, 0x25,
    0x00, 0xB1, 0xB0, 0xB0, 0xB0, 0x30, 0x80, 0x25, 0x02, 0xB9, 0xB0, 0xB0, 0xB0, 0x30, 0x80, 0x25,
    0x61, 0x32, 0x09, 0x19, 0x05, 0x19, 0x0D, 0x19, 0x15, 0x19, 0x1D, 0x19, 0x25, 0x19, 0x2D, 0x19,
    0x35, 0x19, 0x3D, 0x19, 0x45, 0xB0, 0xB0, 0xB0, 0xB0, 0x30, 0x80, 0x25, 0x62, 0xB1, 0xB0, 0xB0,
    0xB0, 0x30, 0x80, 0x25, 0x56, 0xB2, 0xB0, 0xB0, 0xB0, 0x30, 0x80, 0x25, 0x55, 0xB3, 0xB0, 0xB0,
    0xB0, 0x30, 0x80, 0x25, 0x63, 0xB4, 0xB0, 0xB0, 0xB0, 0x30, 0x80, 0x25, 0x51, 0xB5, 0xB0, 0xB0,
    0xB0, 0x30, 0x80, 0x25, 0x57, 0xB6, 0xB0, 0xB0, 0xB0, 0x30, 0x80, 0x25, 0x5D, 0xB7, 0xB0, 0xB0,
    0xB0, 0x30, 0x80, 0x25, 0x5C, 0xB8, 0xB0, 0xB0, 0xB0, 0x30, 0x80, 0x25, 0x5B, 0x33, 0x04, 0x19,
    0x57, 0x19, 0x5F, 0x19, 0x67, 0x19, 0x6F, 0xB6, 0xB0, 0xB0, 0xB0, 0x30, 0x80, 0x25, 0x5E, 0xB7,
    0xB0, 0xB0, 0xB0, 0x30, 0x80, 0x25, 0x5F, 0xB8, 0xB0, 0xB0, 0xB0, 0x30, 0x80, 0x25, 0x5A, 0xB9,
    0xB0, 0xB0, 0xB0, 0x30, 0x80, 0x25, 0x54, 0x34, 0x0A, 0x19, 0x8D, 0x19, 0x95, 0x19, 0x9D, 0x19,
    0xA5, 0x19, 0xAD, 0x19, 0xB5, 0x19, 0xBD, 0x19, 0xC5, 0x19, 0xCD, 0x19, 0xD5, 0xB0, 0xB0, 0xB0,
    0xB0, 0x30, 0x80, 0x25, 0x69, 0xB1, 0xB0, 0xB0, 0xB0, 0x30, 0x80, 0x25, 0x66, 0xB2, 0xB0, 0xB0,
    0xB0, 0x30, 0x80, 0x25, 0x60, 0xB3, 0xB0, 0xB0, 0xB0, 0x30, 0x80, 0x25, 0x50, 0xB4, 0xB0, 0xB0,
    0xB0, 0x30, 0x80, 0x25, 0x6C, 0xB5, 0xB0, 0xB0, 0xB0, 0x30, 0x80, 0x25, 0x67, 0xB6, 0xB0, 0xB0,
    0xB0, 0x30, 0x80, 0x25, 0x68, 0xB7, 0xB0, 0xB0, 0xB0, 0x30, 0x80, 0x25, 0x64, 0xB8, 0xB0, 0xB0,
    0xB0, 0x30, 0x80, 0x25, 0x65, 0xB9, 0xB0, 0xB0, 0xB0, 0x30, 0x80, 0x25, 0x59, 0x35, 0x05, 0x19,
    0xE9, 0x19, 0xF1, 0x19, 0xF9, 0x1A, 0x01, 0x1A, 0x09, 0xB0, 0xB0, 0xB0, 0xB0, 0x30, 0x80, 0x25,
    0x58, 0xB1, 0xB0, 0xB0, 0xB0, 0x30, 0x80, 0x25, 0x52, 0xB2, 0xB0, 0xB0, 0xB0, 0x30, 0x80, 0x25,
    0x53, 0xB3, 0xB0, 0xB0, 0xB0, 0x30, 0x80, 0x25, 0x6B, 0xB4, 0xB0, 0xB0, 0xB0, 0x30, 0x80, 0x25,
    0x6A, 0x61, 0x02, 0x1A, 0x17, 0x1A, 0x2C, 0xE3, 0xF5, 0xF4, 0x65, 0x81, 0x01, 0x5A, 0x1A, 0x20,
    0xE4, 0xEF, 0xF4, 0xE1, 0xE3, 0xE3, 0xE5, 0xEE, 0x74, 0x80, 0x1E, 0x64, 0xED, 0xF0, 0xE9, 0xE7,
    0xF2, 0xE5, 0xE5, 0x6B, 0x80, 0x03, 0xE0, 0x63, 0x05, 0x1A, 0x43, 0x1A, 0x62, 0x1A, 0x6B, 0x1A,
    0x93, 0x1A, 0xA9, 0xE1, 0xF2, 0xEF, 0x6E, 0x82, 0x01, 0x60, 0x1A, 0x4E, 0x1A, 0x5A, 0xE4, 0xEF,
    0xF4, 0xE1, 0xE3, 0xE3, 0xE5, 0xEE, 0x74, 0x80, 0x1E, 0x66, 0xF3, 0xED, 0xE1, 0xEC, 0x6C, 0x80,
    0xF6, 0xFD, 0xE5, 0xE4, 0xE9, 0xEC, 0xEC, 0x61, 0x80, 0x01, 0x5E, 0xE8, 0xF7, 0x61, 0x82, 0x01,
    0x8F, 0x1A, 0x75, 0x1A, 0x80, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0xD8,
    0xE4, 0xE9, 0xE5, 0xF2, 0xE5, 0xF3, 0xE9, 0xF3, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63,
    0x80, 0x04, 0xDA, 0xE9, 0xF2, 0x63, 0x02, 0x1A, 0x9B, 0x1A, 0xA0, 0xEC, 0x65, 0x80, 0x24, 0xC8,
    0xF5, 0xED, 0xE6, 0xEC, 0xE5, 0x78, 0x80, 0x01, 0x5C, 0xEF, 0xED, 0xED, 0xE1, 0xE1, 0xE3, 0xE3,
    0xE5, 0xEE, 0x74, 0x80, 0x02, 0x18, 0xE4, 0xEF, 0x74, 0x02, 0x1A, 0xBE, 0x1A, 0xC7, 0xE1, 0xE3,
    0xE3, 0xE5, 0xEE, 0x74, 0x80, 0x1E, 0x60, 0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x81, 0x1E, 0x62, 0x1A,
    0xD1, 0xE4, 0xEF, 0xF4, 0xE1, 0xE3, 0xE3, 0xE5, 0xEE, 0x74, 0x80, 0x1E, 0x68, 0x65, 0x02, 0x1A,
    0xE3, 0x1A, 0xEF, 0xE8, 0xE1, 0xF2, 0xED, 0xE5, 0xEE, 0xE9, 0xE1, 0x6E, 0x80, 0x05, 0x4D, 0xF6,
    0xE5, 0xEE, 0xF2, 0xEF, 0xED, 0xE1, 0x6E, 0x80, 0x21, 0x66, 0x68, 0x05, 0x1B, 0x06, 0x1B, 0x22,
    0x1B, 0x30, 0x1B, 0x3B, 0x1B, 0x48, 0x61, 0x02, 0x1B, 0x0C, 0x1B, 0x17, 0xE1, 0xF2, 0xED, 0xE5,
    0xEE, 0xE9, 0xE1, 0x6E, 0x80, 0x05, 0x47, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80,
    0x04, 0x28, 0xE3, 0xE8, 0xE1, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x29,
    0xE5, 0xE9, 0xE3, 0xEF, 0xF0, 0xF4, 0xE9, 0x63, 0x80, 0x03, 0xE2, 0xE8, 0xE1, 0xE3, 0xF9, 0xF2,
    0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0xBA, 0xE9, 0xED, 0xE1, 0xE3, 0xEF, 0xF0, 0xF4, 0xE9,
    0x63, 0x80, 0x03, 0xEC, 0x69, 0x02, 0x1B, 0x5A, 0x1B, 0x60, 0xE7, 0xED, 0x61, 0x80, 0x03, 0xA3,
    0xF8, 0xF2, 0xEF, 0xED, 0xE1, 0x6E, 0x80, 0x21, 0x65, 0xED, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1,
    0xE3, 0x65, 0x80, 0xFF, 0x33, 0xEF, 0xE6, 0xF4, 0xF3, 0xE9, 0xE7, 0xEE, 0xE3, 0xF9, 0xF2, 0xE9,
    0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x2C, 0xF3, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xF7, 0x73, 0xF4,
    0xE9, 0xE7, 0xED, 0xE1, 0xE7, 0xF2, 0xE5, 0xE5, 0x6B, 0x80, 0x03, 0xDA, 0x54, 0x8D, 0x00, 0x54,
    0x1B, 0xBA, 0x1B, 0xBF, 0x1B, 0xC5, 0x1C, 0x07, 0x1C, 0x20, 0x1C, 0x60, 0x1C, 0x93, 0x1C, 0xB1,
    0x1C, 0xBD, 0x1C, 0xC9, 0x1C, 0xF6, 0x1D, 0x06, 0x1D, 0x2E, 0xE1, 0x75, 0x80, 0x03, 0xA4, 0xE2,
    0xE1, 0x72, 0x80, 0x01, 0x66, 0x63, 0x04, 0x1B, 0xCF, 0x1B, 0xD6, 0x1B, 0xDF, 0x1B, 0xFA, 0xE1,
    0xF2, 0xEF, 0x6E, 0x80, 0x01, 0x64, 0xE5, 0xE4, 0xE9, 0xEC, 0xEC, 0x61, 0x80, 0x01, 0x62, 0xE9,
    0xF2, 0x63, 0x02, 0x1B, 0xE7, 0x1B, 0xEC, 0xEC, 0x65, 0x80, 0x24, 0xC9, 0xF5, 0xED, 0xE6, 0xEC,
    0xE5, 0xF8, 0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E, 0x70, 0xEF, 0xED, 0xED, 0xE1, 0xE1, 0xE3,
    0xE3, 0xE5, 0xEE, 0x74, 0x80, 0x01, 0x62, 0xE4, 0xEF, 0x74, 0x02, 0x1C, 0x0F, 0x1C, 0x18, 0xE1,
    0xE3, 0xE3, 0xE5, 0xEE, 0x74, 0x80, 0x1E, 0x6A, 0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E, 0x6C,
    0x65, 0x04, 0x1C, 0x2A, 0x1C, 0x35, 0x1C, 0x49, 0x1C, 0x52, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC,
    0xE9, 0x63, 0x80, 0x04, 0x22, 0xE4, 0xE5, 0xF3, 0xE3, 0xE5, 0xEE, 0xE4, 0xE5, 0xF2, 0xE3, 0xF9,
    0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0xAC, 0xEE, 0xF2, 0xEF, 0xED, 0xE1, 0x6E, 0x80,
    0x21, 0x69, 0xF4, 0xF3, 0xE5, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0xB4,
    0x68, 0x03, 0x1C, 0x68, 0x1C, 0x6E, 0x1C, 0x88, 0xE5, 0xF4, 0x61, 0x80, 0x03, 0x98, 0x6F, 0x02,
    0x1C, 0x74, 0x1C, 0x79, 0xEF, 0x6B, 0x80, 0x01, 0xAC, 0xF2, 0x6E, 0x81, 0x00, 0xDE, 0x1C, 0x80,
    0xF3, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xF7, 0xFE, 0xF2, 0xE5, 0xE5, 0xF2, 0xEF, 0xED, 0xE1, 0x6E,
    0x80, 0x21, 0x62, 0x69, 0x02, 0x1C, 0x99, 0x1C, 0xA4, 0xEC, 0xE4, 0xE5, 0xF3, 0xED, 0xE1, 0xEC,
    0x6C, 0x80, 0xF6, 0xFE, 0xF7, 0xEE, 0xE1, 0xF2, 0xED, 0xE5, 0xEE, 0xE9, 0xE1, 0x6E, 0x80, 0x05,
    0x4F, 0xEC, 0xE9, 0xEE, 0xE5, 0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E, 0x6E, 0xED, 0xEF, 0xEE,
    0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80, 0xFF, 0x34, 0x6F, 0x02, 0x1C, 0xCF, 0x1C, 0xDA, 0xE1,
    0xF2, 0xED, 0xE5, 0xEE, 0xE9, 0xE1, 0x6E, 0x80, 0x05, 0x39, 0xEE, 0x65, 0x03, 0x1C, 0xE3, 0x1C,
    0xEA, 0x1C, 0xF0, 0xE6, 0xE9, 0xF6, 0x65, 0x80, 0x01, 0xBC, 0xF3, 0xE9, 0x78, 0x80, 0x01, 0x84,
    0xF4, 0xF7, 0x6F, 0x80, 0x01, 0xA7, 0xF2, 0xE5, 0xF4, 0xF2, 0xEF, 0xE6, 0xEC, 0xE5, 0xF8, 0xE8,
    0xEF, 0xEF, 0x6B, 0x80, 0x01, 0xAE, 0x73, 0x03, 0x1D, 0x0E, 0x1D, 0x1A, 0x1D, 0x27, 0xE5, 0xE3,
    0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x26, 0xE8, 0xE5, 0xE3, 0xF9, 0xF2, 0xE9,
    0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x0B, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xF7, 0x74, 0x77, 0x02,
    0x1D, 0x34, 0x1D, 0x40, 0xE5, 0xEC, 0xF6, 0xE5, 0xF2, 0xEF, 0xED, 0xE1, 0x6E, 0x80, 0x21, 0x6B,
    0xEF, 0xF2, 0xEF, 0xED, 0xE1, 0x6E, 0x80, 0x21, 0x61, 0x55, 0x8E, 0x00, 0x55, 0x1D, 0x69, 0x1D,
    0x7B, 0x1D, 0x83, 0x1D, 0xC6, 0x1E, 0x45, 0x1E, 0x57, 0x1E, 0xC6, 0x1E, 0xD6, 0x1E, 0xE2, 0x1F,
    0x15, 0x1F, 0x1E, 0x1F, 0x8E, 0x1F, 0x95, 0x1F, 0xDB, 0xE1, 0xE3, 0xF5, 0xF4, 0x65, 0x81, 0x00,
    0xDA, 0x1D, 0x73, 0xF3, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xF7, 0xFA, 0xE2, 0xF2, 0xE5, 0xF6, 0x65,
    0x80, 0x01, 0x6C, 0x63, 0x03, 0x1D, 0x8B, 0x1D, 0x92, 0x1D, 0xBC, 0xE1, 0xF2, 0xEF, 0x6E, 0x80,
    0x01, 0xD3, 0xE9, 0xF2, 0x63, 0x02, 0x1D, 0x9A, 0x1D, 0x9F, 0xEC, 0x65, 0x80, 0x24, 0xCA, 0xF5,
    0xED, 0xE6, 0xEC, 0xE5, 0x78, 0x82, 0x00, 0xDB, 0x1D, 0xAC, 0x1D, 0xB4, 0xE2, 0xE5, 0xEC, 0xEF,
    0x77, 0x80, 0x1E, 0x76, 0xF3, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xF7, 0xFB, 0xF9, 0xF2, 0xE9, 0xEC,
    0xEC, 0xE9, 0x63, 0x80, 0x04, 0x23, 0x64, 0x03, 0x1D, 0xCE, 0x1D, 0xE5, 0x1E, 0x3B, 0xE2, 0x6C,
    0x02, 0x1D, 0xD5, 0x1D, 0xDD, 0xE1, 0xE3, 0xF5, 0xF4, 0x65, 0x80, 0x01, 0x70, 0xE7, 0xF2, 0xE1,
    0xF6, 0x65, 0x80, 0x02, 0x14, 0xE9, 0xE5, 0xF2, 0xE5, 0xF3, 0xE9, 0x73, 0x86, 0x00, 0xDC, 0x1D,
    0xFB, 0x1E, 0x03, 0x1E, 0x0B, 0x1E, 0x22, 0x1E, 0x2A, 0x1E, 0x33, 0xE1, 0xE3, 0xF5, 0xF4, 0x65,
    0x80, 0x01, 0xD7, 0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E, 0x72, 0x63, 0x02, 0x1E, 0x11, 0x1E,
    0x18, 0xE1, 0xF2, 0xEF, 0x6E, 0x80, 0x01, 0xD9, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80,
    0x04, 0xF0, 0xE7, 0xF2, 0xE1, 0xF6, 0x65, 0x80, 0x01, 0xDB, 0xED, 0xE1, 0xE3, 0xF2, 0xEF, 0x6E,
    0x80, 0x01, 0xD5, 0xF3, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xF7, 0xFC, 0xEF, 0xF4, 0xE2, 0xE5, 0xEC,
    0xEF, 0x77, 0x80, 0x1E, 0xE4, 0xE7, 0xF2, 0xE1, 0xF6, 0x65, 0x81, 0x00, 0xD9, 0x1E, 0x4F, 0xF3,
    0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xF7, 0xF9, 0x68, 0x02, 0x1E, 0x5D, 0x1E, 0xAB, 0x6F, 0x02, 0x1E,
    0x63, 0x1E, 0x6D, 0xEF, 0xEB, 0xE1, 0xE2, 0xEF, 0xF6, 0x65, 0x80, 0x1E, 0xE6, 0xF2, 0x6E, 0x85,
    0x01, 0xAF, 0x1E, 0x7C, 0x1E, 0x84, 0x1E, 0x8F, 0x1E, 0x97, 0x1E, 0xA3, 0xE1, 0xE3, 0xF5, 0xF4,
    0x65, 0x80, 0x1E, 0xE8, 0xE4, 0xEF, 0xF4, 0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E, 0xF0, 0xE7,
    0xF2, 0xE1, 0xF6, 0x65, 0x80, 0x1E, 0xEA, 0xE8, 0xEF, 0xEF, 0xEB, 0xE1, 0xE2, 0xEF, 0xF6, 0x65,
    0x80, 0x1E, 0xEC, 0xF4, 0xE9, 0xEC, 0xE4, 0x65, 0x80, 0x1E, 0xEE, 0xF5, 0xEE, 0xE7, 0xE1, 0xF2,
    0xF5, 0xED, 0xEC, 0xE1, 0xF5, 0x74, 0x81, 0x01, 0x70, 0x1E, 0xBB, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC,
    0xEC, 0xE9, 0x63, 0x80, 0x04, 0xF2, 0xE9, 0xEE, 0xF6, 0xE5, 0xF2, 0xF4, 0xE5, 0xE4, 0xE2, 0xF2,
    0xE5, 0xF6, 0x65, 0x80, 0x02, 0x16, 0xEB, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80,
    0x04, 0x78, 0x6D, 0x02, 0x1E, 0xE8, 0x1F, 0x0A, 0xE1, 0xE3, 0xF2, 0xEF, 0x6E, 0x82, 0x01, 0x6A,
    0x1E, 0xF4, 0x1E, 0xFF, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0xEE, 0xE4,
    0xE9, 0xE5, 0xF2, 0xE5, 0xF3, 0xE9, 0x73, 0x80, 0x1E, 0x7A, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1,
    0xE3, 0x65, 0x80, 0xFF, 0x35, 0xEF, 0xE7, 0xEF, 0xEE, 0xE5, 0x6B, 0x80, 0x01, 0x72, 0xF0, 0xF3,
    0xE9, 0xEC, 0xEF, 0x6E, 0x85, 0x03, 0xA5, 0x1F, 0x31, 0x1F, 0x35, 0x1F, 0x5A, 0x1F, 0x79, 0x1F,
    0x86, 0x31, 0x80, 0x03, 0xD2, 0x61, 0x02, 0x1F, 0x3B, 0x1F, 0x51, 0xE3, 0xF5, 0xF4, 0xE5, 0xE8,
    0xEF, 0xEF, 0xEB, 0xF3, 0xF9, 0xED, 0xE2, 0xEF, 0xEC, 0xE7, 0xF2, 0xE5, 0xE5, 0x6B, 0x80, 0x03,
    0xD3, 0xE6, 0xF2, 0xE9, 0xE3, 0xE1, 0x6E, 0x80, 0x01, 0xB1, 0xE4, 0xE9, 0xE5, 0xF2, 0xE5, 0xF3,
    0xE9, 0x73, 0x81, 0x03, 0xAB, 0x1F, 0x67, 0xE8, 0xEF, 0xEF, 0xEB, 0xF3, 0xF9, 0xED, 0xE2, 0xEF,
    0xEC, 0xE7, 0xF2, 0xE5, 0xE5, 0x6B, 0x80, 0x03, 0xD4, 0xE8, 0xEF, 0xEF, 0xEB, 0xF3, 0xF9, 0xED,
    0xE2, 0xEF, 0x6C, 0x80, 0x03, 0xD2, 0xF4, 0xEF, 0xEE, 0xEF, 0x73, 0x80, 0x03, 0x8E, 0xF2, 0xE9,
    0xEE, 0x67, 0x80, 0x01, 0x6E, 0x73, 0x03, 0x1F, 0x9D, 0x1F, 0xAC, 0x1F, 0xB3, 0xE8, 0xEF, 0xF2,
    0xF4, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x0E, 0xED, 0xE1, 0xEC, 0x6C,
    0x80, 0xF7, 0x75, 0xF4, 0xF2, 0xE1, 0xE9, 0xE7, 0xE8, 0x74, 0x02, 0x1F, 0xBF, 0x1F, 0xCA, 0xE3,
    0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0xAE, 0xF3, 0xF4, 0xF2, 0xEF, 0xEB, 0xE5,
    0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0xB0, 0xF4, 0xE9, 0xEC, 0xE4, 0x65,
    0x82, 0x01, 0x68, 0x1F, 0xE7, 0x1F, 0xEF, 0xE1, 0xE3, 0xF5, 0xF4, 0x65, 0x80, 0x1E, 0x78, 0xE2,
    0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E, 0x74, 0x56, 0x88, 0x00, 0x56, 0x20, 0x0B, 0x20, 0x14, 0x20,
    0x1F, 0x20, 0x3C, 0x20, 0x43, 0x20, 0x4F, 0x20, 0x5B, 0x20, 0x63, 0xE3, 0xE9, 0xF2, 0xE3, 0xEC,
    0x65, 0x80, 0x24, 0xCB, 0xE4, 0xEF, 0xF4, 0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E, 0x7E, 0x65,
    0x02, 0x20, 0x25, 0x20, 0x30, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x12,
    0xF7, 0xE1, 0xF2, 0xED, 0xE5, 0xEE, 0xE9, 0xE1, 0x6E, 0x80, 0x05, 0x4E, 0xE8, 0xEF, 0xEF, 0x6B,
    0x80, 0x01, 0xB2, 0xED, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80, 0xFF, 0x36, 0xEF,
    0xE1, 0xF2, 0xED, 0xE5, 0xEE, 0xE9, 0xE1, 0x6E, 0x80, 0x05, 0x48, 0xF3, 0xED, 0xE1, 0xEC, 0x6C,
    0x80, 0xF7, 0x76, 0xF4, 0xE9, 0xEC, 0xE4, 0x65, 0x80, 0x1E, 0x7C, 0x57, 0x86, 0x00, 0x57, 0x20,
    0x7B, 0x20, 0x83, 0x20, 0x9A, 0x20, 0xC2, 0x20, 0xCA, 0x20, 0xD6, 0xE1, 0xE3, 0xF5, 0xF4, 0x65,
    0x80, 0x1E, 0x82, 0xE3, 0xE9, 0xF2, 0x63, 0x02, 0x20, 0x8C, 0x20, 0x91, 0xEC, 0x65, 0x80, 0x24,
    0xCC, 0xF5, 0xED, 0xE6, 0xEC, 0xE5, 0x78, 0x80, 0x01, 0x74, 0x64, 0x02, 0x20, 0xA0, 0x20, 0xAA,
    0xE9, 0xE5, 0xF2, 0xE5, 0xF3, 0xE9, 0x73, 0x80, 0x1E, 0x84, 0xEF, 0x74, 0x02, 0x20, 0xB1, 0x20,
    0xBA, 0xE1, 0xE3, 0xE3, 0xE5, 0xEE, 0x74, 0x80, 0x1E, 0x86, 0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80,
    0x1E, 0x88, 0xE7, 0xF2, 0xE1, 0xF6, 0x65, 0x80, 0x1E, 0x80, 0xED, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0,
    0xE1, 0xE3, 0x65, 0x80, 0xFF, 0x37, 0xF3, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xF7, 0x77, 0x58, 0x86,
    0x00, 0x58, 0x20, 0xEE, 0x20, 0xF7, 0x21, 0x12, 0x21, 0x1F, 0x21, 0x23, 0x21, 0x2F, 0xE3, 0xE9,
    0xF2, 0xE3, 0xEC, 0x65, 0x80, 0x24, 0xCD, 0x64, 0x02, 0x20, 0xFD, 0x21, 0x07, 0xE9, 0xE5, 0xF2,
    0xE5, 0xF3, 0xE9, 0x73, 0x80, 0x1E, 0x8C, 0xEF, 0xF4, 0xE1, 0xE3, 0xE3, 0xE5, 0xEE, 0x74, 0x80,
    0x1E, 0x8A, 0xE5, 0xE8, 0xE1, 0xF2, 0xED, 0xE5, 0xEE, 0xE9, 0xE1, 0x6E, 0x80, 0x05, 0x3D, 0x69,
    0x80, 0x03, 0x9E, 0xED, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80, 0xFF, 0x38, 0xF3,
    0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xF7, 0x78, 0x59, 0x8B, 0x00, 0x59, 0x21, 0x51, 0x21, 0x74, 0x21,
    0x8B, 0x21, 0xBD, 0x21, 0xE4, 0x21, 0xEC, 0x21, 0xFD, 0x22, 0x28, 0x22, 0x34, 0x22, 0x3C, 0x22,
    0x44, 0x61, 0x02, 0x21, 0x57, 0x21, 0x68, 0xE3, 0xF5, 0xF4, 0x65, 0x81, 0x00, 0xDD, 0x21, 0x60,
    0xF3, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xF7, 0xFD, 0xF4, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9,
    0x63, 0x80, 0x04, 0x62, 0xE3, 0xE9, 0xF2, 0x63, 0x02, 0x21, 0x7D, 0x21, 0x82, 0xEC, 0x65, 0x80,
    0x24, 0xCE, 0xF5, 0xED, 0xE6, 0xEC, 0xE5, 0x78, 0x80, 0x01, 0x76, 0x64, 0x02, 0x21, 0x91, 0x21,
    0xA5, 0xE9, 0xE5, 0xF2, 0xE5, 0xF3, 0xE9, 0x73, 0x81, 0x01, 0x78, 0x21, 0x9D, 0xF3, 0xED, 0xE1,
    0xEC, 0x6C, 0x80, 0xF7, 0xFF, 0xEF, 0x74, 0x02, 0x21, 0xAC, 0x21, 0xB5, 0xE1, 0xE3, 0xE3, 0xE5,
    0xEE, 0x74, 0x80, 0x1E, 0x8E, 0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E, 0xF4, 0xE5, 0x72, 0x02,
    0x21, 0xC4, 0x21, 0xD0, 0xE9, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x2B,
    0xF5, 0xE4, 0xE9, 0xE5, 0xF2, 0xE5, 0xF3, 0xE9, 0xF3, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9,
    0x63, 0x80, 0x04, 0xF8, 0xE7, 0xF2, 0xE1, 0xF6, 0x65, 0x80, 0x1E, 0xF2, 0xE8, 0xEF, 0xEF, 0x6B,
    0x81, 0x01, 0xB3, 0x21, 0xF5, 0xE1, 0xE2, 0xEF, 0xF6, 0x65, 0x80, 0x1E, 0xF6, 0x69, 0x03, 0x22,
    0x05, 0x22, 0x10, 0x22, 0x1B, 0xE1, 0xF2, 0xED, 0xE5, 0xEE, 0xE9, 0xE1, 0x6E, 0x80, 0x05, 0x45,
    0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x07, 0xF7, 0xEE, 0xE1, 0xF2, 0xED,
    0xE5, 0xEE, 0xE9, 0xE1, 0x6E, 0x80, 0x05, 0x52, 0xED, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3,
    0x65, 0x80, 0xFF, 0x39, 0xF3, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xF7, 0x79, 0xF4, 0xE9, 0xEC, 0xE4,
    0x65, 0x80, 0x1E, 0xF8, 0xF5, 0x73, 0x02, 0x22, 0x4B, 0x22, 0x71, 0xE2, 0xE9, 0x67, 0x02, 0x22,
    0x53, 0x22, 0x5E, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x6A, 0xE9, 0xEF,
    0xF4, 0xE9, 0xE6, 0xE9, 0xE5, 0xE4, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04,
    0x6C, 0xEC, 0xE9, 0xF4, 0xF4, 0xEC, 0x65, 0x02, 0x22, 0x7C, 0x22, 0x87, 0xE3, 0xF9, 0xF2, 0xE9,
    0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x66, 0xE9, 0xEF, 0xF4, 0xE9, 0xE6, 0xE9, 0xE5, 0xE4, 0xE3,
    0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x68, 0x5A, 0x88, 0x00, 0x5A, 0x22, 0xAE,
    0x22, 0xC6, 0x22, 0xF3, 0x23, 0x0E, 0x23, 0x51, 0x23, 0xAD, 0x23, 0xB9, 0x23, 0xC5, 0x61, 0x02,
    0x22, 0xB4, 0x22, 0xBF, 0xE1, 0xF2, 0xED, 0xE5, 0xEE, 0xE9, 0xE1, 0x6E, 0x80, 0x05, 0x36, 0xE3,
    0xF5, 0xF4, 0x65, 0x80, 0x01, 0x79, 0x63, 0x02, 0x22, 0xCC, 0x22, 0xDD, 0xE1, 0xF2, 0xEF, 0x6E,
    0x81, 0x01, 0x7D, 0x22, 0xD5, 0xF3, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xF6, 0xFF, 0xE9, 0xF2, 0x63,
    0x02, 0x22, 0xE5, 0x22, 0xEA, 0xEC, 0x65, 0x80, 0x24, 0xCF, 0xF5, 0xED, 0xE6, 0xEC, 0xE5, 0x78,
    0x80, 0x1E, 0x90, 0xE4, 0xEF, 0x74, 0x82, 0x01, 0x7B, 0x22, 0xFD, 0x23, 0x06, 0xE1, 0xE3, 0xE3,
    0xE5, 0xEE, 0x74, 0x80, 0x01, 0x7B, 0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E, 0x92, 0x65, 0x03,
    0x23, 0x16, 0x23, 0x21, 0x23, 0x4C, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04,
    0x17, 0x64, 0x02, 0x23, 0x27, 0x23, 0x3A, 0xE5, 0xF3, 0xE3, 0xE5, 0xEE, 0xE4, 0xE5, 0xF2, 0xE3,
    0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x98, 0xE9, 0xE5, 0xF2, 0xE5, 0xF3, 0xE9,
    0xF3, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0xDE, 0xF4, 0x61, 0x80, 0x03,
    0x96, 0xE8, 0x65, 0x04, 0x23, 0x5C, 0x23, 0x67, 0x23, 0x77, 0x23, 0x82, 0xE1, 0xF2, 0xED, 0xE5,
    0xEE, 0xE9, 0xE1, 0x6E, 0x80, 0x05, 0x3A, 0xE2, 0xF2, 0xE5, 0xF6, 0xE5, 0xE3, 0xF9, 0xF2, 0xE9,
    0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0xC1, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80,
    0x04, 0x16, 0x64, 0x02, 0x23, 0x88, 0x23, 0x9B, 0xE5, 0xF3, 0xE3, 0xE5, 0xEE, 0xE4, 0xE5, 0xF2,
    0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x96, 0xE9, 0xE5, 0xF2, 0xE5, 0xF3,
    0xE9, 0xF3, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0xDC, 0xEC, 0xE9, 0xEE,
    0xE5, 0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E, 0x94, 0xED, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1,
    0xE3, 0x65, 0x80, 0xFF, 0x3A, 0x73, 0x02, 0x23, 0xCB, 0x23, 0xD2, 0xED, 0xE1, 0xEC, 0x6C, 0x80,
    0xF7, 0x7A, 0xF4, 0xF2, 0xEF, 0xEB, 0x65, 0x80, 0x01, 0xB5, 0x61, 0x9E, 0x00, 0x61, 0x24, 0x1A,
    0x26, 0x9A, 0x27, 0x04, 0x27, 0x44, 0x27, 0x84, 0x27, 0xC4, 0x28, 0x04, 0x28, 0x44, 0x28, 0x7E,
    0x28, 0xBE, 0x29, 0x46, 0x29, 0xD9, 0x2A, 0x89, 0x2A, 0xED, 0x2B, 0x11, 0x31, 0xC0, 0x31, 0xE5,
    0x32, 0x00, 0x32, 0xE1, 0x33, 0x07, 0x34, 0x60, 0x34, 0xA8, 0x35, 0x7B, 0x35, 0x84, 0x36, 0x05,
    0x38, 0x0D, 0x39, 0x03, 0x39, 0x32, 0x39, 0xC9, 0x39, 0xD7, 0x31, 0x8A, 0x27, 0x01, 0x24, 0x32,
    0x24, 0x72, 0x24, 0x9A, 0x24, 0xDA, 0x25, 0x1A, 0x25, 0x5A, 0x25, 0x9A, 0x25, 0xDA, 0x26, 0x1A,
    0x26, 0x5A, 0x30, 0x8A, 0x27, 0x21, 0x24, 0x4A, 0x24, 0x4E, 0x24, 0x52, 0x24, 0x56, 0x24, 0x5A,
    0x24, 0x5E, 0x24, 0x62, 0x24, 0x66, 0x24, 0x6A, 0x24, 0x6E, 0x30, 0x80, 0x27, 0x5E, 0x31, 0x80,
    0x27, 0x61, 0x32, 0x80, 0x27, 0x62, 0x33, 0x80, 0x27, 0x63, 0x34, 0x80, 0x27, 0x64, 0x35, 0x80,
    0x27, 0x10, 0x36, 0x80, 0x27, 0x65, 0x37, 0x80, 0x27, 0x66, 0x38, 0x80, 0x27, 0x67, 0x39, 0x80,
    0x26, 0x60, 0x31, 0x86, 0x26, 0x1B, 0x24, 0x82, 0x24, 0x86, 0x24, 0x8A, 0x24, 0x8E, 0x24, 0x92,
    0x24, 0x96, 0x30, 0x80, 0x26, 0x65, 0x31, 0x80, 0x26, 0x66, 0x32, 0x80, 0x26, 0x63, 0x37, 0x80,
    0x27, 0x09, 0x38, 0x80, 0x27, 0x08, 0x39, 0x80, 0x27, 0x07, 0x32, 0x8A, 0x26, 0x1E, 0x24, 0xB2,
    0x24, 0xB6, 0x24, 0xBA, 0x24, 0xBE, 0x24, 0xC2, 0x24, 0xC6, 0x24, 0xCA, 0x24, 0xCE, 0x24, 0xD2,
    0x24, 0xD6, 0x30, 0x80, 0x24, 0x60, 0x31, 0x80, 0x24, 0x61, 0x32, 0x80, 0x24, 0x62, 0x33, 0x80,
    0x24, 0x63, 0x34, 0x80, 0x24, 0x64, 0x35, 0x80, 0x24, 0x65, 0x36, 0x80, 0x24, 0x66, 0x37, 0x80,
    0x24, 0x67, 0x38, 0x80, 0x24, 0x68, 0x39, 0x80, 0x24, 0x69, 0x33, 0x8A, 0x27, 0x0C, 0x24, 0xF2,
    0x24, 0xF6, 0x24, 0xFA, 0x24, 0xFE, 0x25, 0x02, 0x25, 0x06, 0x25, 0x0A, 0x25, 0x0E, 0x25, 0x12,
    0x25, 0x16, 0x30, 0x80, 0x27, 0x76, 0x31, 0x80, 0x27, 0x77, 0x32, 0x80, 0x27, 0x78, 0x33, 0x80,
    0x27, 0x79, 0x34, 0x80, 0x27, 0x7A, 0x35, 0x80, 0x27, 0x7B, 0x36, 0x80, 0x27, 0x7C, 0x37, 0x80,
    0x27, 0x7D, 0x38, 0x80, 0x27, 0x7E, 0x39, 0x80, 0x27, 0x7F, 0x34, 0x8A, 0x27, 0x0D, 0x25, 0x32,
    0x25, 0x36, 0x25, 0x3A, 0x25, 0x3E, 0x25, 0x42, 0x25, 0x46, 0x25, 0x4A, 0x25, 0x4E, 0x25, 0x52,
    0x25, 0x56, 0x30, 0x80, 0x27, 0x80, 0x31, 0x80, 0x27, 0x81, 0x32, 0x80, 0x27, 0x82, 0x33, 0x80,
    0x27, 0x83, 0x34, 0x80, 0x27, 0x84, 0x35, 0x80, 0x27, 0x85, 0x36, 0x80, 0x27, 0x86, 0x37, 0x80,
    0x27, 0x87, 0x38, 0x80, 0x27, 0x88, 0x39, 0x80, 0x27, 0x89, 0x35, 0x8A, 0x27, 0x0E, 0x25, 0x72,
    0x25, 0x76, 0x25, 0x7A, 0x25, 0x7E, 0x25, 0x82, 0x25, 0x86, 0x25, 0x8A, 0x25, 0x8E, 0x25, 0x92,
    0x25, 0x96, 0x30, 0x80, 0x27, 0x8A, 0x31, 0x80, 0x27, 0x8B, 0x32, 0x80, 0x27, 0x8C, 0x33, 0x80,
    0x27, 0x8D, 0x34, 0x80, 0x27, 0x8E, 0x35, 0x80, 0x27, 0x8F, 0x36, 0x80, 0x27, 0x90, 0x37, 0x80,
    0x27, 0x91, 0x38, 0x80, 0x27, 0x92, 0x39, 0x80, 0x27, 0x93, 0x36, 0x8A, 0x27, 0x0F, 0x25, 0xB2,
    0x25, 0xB6, 0x25, 0xBA, 0x25, 0xBE, 0x25, 0xC2, 0x25, 0xC6, 0x25, 0xCA, 0x25, 0xCE, 0x25, 0xD2,
    0x25, 0xD6, 0x30, 0x80, 0x27, 0x94, 0x31, 0x80, 0x21, 0x92, 0x32, 0x80, 0x27, 0xA3, 0x33, 0x80,
    0x21, 0x94, 0x34, 0x80, 0x21, 0x95, 0x35, 0x80, 0x27, 0x99, 0x36, 0x80, 0x27, 0x9B, 0x37, 0x80,
    0x27, 0x9C, 0x38, 0x80, 0x27, 0x9D, 0x39, 0x80, 0x27, 0x9E, 0x37, 0x8A, 0x27, 0x11, 0x25, 0xF2,
    0x25, 0xF6, 0x25, 0xFA, 0x25, 0xFE, 0x26, 0x02, 0x26, 0x06, 0x26, 0x0A, 0x26, 0x0E, 0x26, 0x12,
    0x26, 0x16, 0x30, 0x80, 0x27, 0x9F, 0x31, 0x80, 0x27, 0xA0, 0x32, 0x80, 0x27, 0xA1, 0x33, 0x80,
    0x27, 0xA2, 0x34, 0x80, 0x27, 0xA4, 0x35, 0x80, 0x27, 0xA5, 0x36, 0x80, 0x27, 0xA6, 0x37, 0x80,
    0x27, 0xA7, 0x38, 0x80, 0x27, 0xA8, 0x39, 0x80, 0x27, 0xA9, 0x38, 0x8A, 0x27, 0x12, 0x26, 0x32,
    0x26, 0x36, 0x26, 0x3A, 0x26, 0x3E, 0x26, 0x42, 0x26, 0x46, 0x26, 0x4A, 0x26, 0x4E, 0x26, 0x52,
    0x26, 0x56, 0x30, 0x80, 0x27, 0xAB, 0x31, 0x80, 0x27, 0xAD, 0x32, 0x80, 0x27, 0xAF, 0x33, 0x80,
    0x27, 0xB2, 0x34, 0x80, 0x27, 0xB3, 0x35, 0x80, 0x27, 0xB5, 0x36, 0x80, 0x27, 0xB8, 0x37, 0x80,
    0x27, 0xBA, 0x38, 0x80, 0x27, 0xBB, 0x39, 0x80, 0x27, 0xBC, 0x39, 0x8A, 0x27, 0x13, 0x26, 0x72,
    0x26, 0x76, 0x26, 0x7A, 0x26, 0x7E, 0x26, 0x82, 0x26, 0x86, 0x26, 0x8A, 0x26, 0x8E, 0x26, 0x92,
    0x26, 0x96, 0x30, 0x80, 0x27, 0xBD, 0x31, 0x80, 0x27, 0xBE, 0x32, 0x80, 0x27, 0x9A, 0x33, 0x80,
    0x27, 0xAA, 0x34, 0x80, 0x27, 0xB6, 0x35, 0x80, 0x27, 0xB9, 0x36, 0x80, 0x27, 0x98, 0x37, 0x80,
    0x27, 0xB4, 0x38, 0x80, 0x27, 0xB7, 0x39, 0x80, 0x27, 0xAC, 0x32, 0x8A, 0x27, 0x02, 0x26, 0xB2,
    0x26, 0xE0, 0x26, 0xE4, 0x26, 0xE8, 0x26, 0xEC, 0x26, 0xF0, 0x26, 0xF4, 0x26, 0xF8, 0x26, 0xFC,
    0x27, 0x00, 0x30, 0x87, 0x27, 0x14, 0x26, 0xC4, 0x26, 0xC8, 0x26, 0xCC, 0x26, 0xD0, 0x26, 0xD4,
    0x26, 0xD8, 0x26, 0xDC, 0x30, 0x80, 0x27, 0xAE, 0x31, 0x80, 0x27, 0xB1, 0x32, 0x80, 0x27, 0x03,
    0x33, 0x80, 0x27, 0x50, 0x34, 0x80, 0x27, 0x52, 0x35, 0x80, 0x27, 0x6E, 0x36, 0x80, 0x27, 0x70,
    0x31, 0x80, 0x27, 0x15, 0x32, 0x80, 0x27, 0x16, 0x33, 0x80, 0x27, 0x17, 0x34, 0x80, 0x27, 0x18,
    0x35, 0x80, 0x27, 0x19, 0x36, 0x80, 0x27, 0x1A, 0x37, 0x80, 0x27, 0x1B, 0x38, 0x80, 0x27, 0x1C,
    0x39, 0x80, 0x27, 0x22, 0x33, 0x8A, 0x27, 0x04, 0x27, 0x1C, 0x27, 0x20, 0x27, 0x24, 0x27, 0x28,
    0x27, 0x2C, 0x27, 0x30, 0x27, 0x34, 0x27, 0x38, 0x27, 0x3C, 0x27, 0x40, 0x30, 0x80, 0x27, 0x23,
    0x31, 0x80, 0x27, 0x24, 0x32, 0x80, 0x27, 0x25, 0x33, 0x80, 0x27, 0x26, 0x34, 0x80, 0x27, 0x27,
    0x35, 0x80, 0x26, 0x05, 0x36, 0x80, 0x27, 0x29, 0x37, 0x80, 0x27, 0x2A, 0x38, 0x80, 0x27, 0x2B,
    0x39, 0x80, 0x27, 0x2C, 0x34, 0x8A, 0x26, 0x0E, 0x27, 0x5C, 0x27, 0x60, 0x27, 0x64, 0x27, 0x68,
    0x27, 0x6C, 0x27, 0x70, 0x27, 0x74, 0x27, 0x78, 0x27, 0x7C, 0x27, 0x80, 0x30, 0x80, 0x27, 0x2D,
    0x31, 0x80, 0x27, 0x2E, 0x32, 0x80, 0x27, 0x2F, 0x33, 0x80, 0x27, 0x30, 0x34, 0x80, 0x27, 0x31,
    0x35, 0x80, 0x27, 0x32, 0x36, 0x80, 0x27, 0x33, 0x37, 0x80, 0x27, 0x34, 0x38, 0x80, 0x27, 0x35,
    0x39, 0x80, 0x27, 0x36, 0x35, 0x8A, 0x27, 0x06, 0x27, 0x9C, 0x27, 0xA0, 0x27, 0xA4, 0x27, 0xA8,
    0x27, 0xAC, 0x27, 0xB0, 0x27, 0xB4, 0x27, 0xB8, 0x27, 0xBC, 0x27, 0xC0, 0x30, 0x80, 0x27, 0x37,
    0x31, 0x80, 0x27, 0x38, 0x32, 0x80, 0x27, 0x39, 0x33, 0x80, 0x27, 0x3A, 0x34, 0x80, 0x27, 0x3B,
    0x35, 0x80, 0x27, 0x3C, 0x36, 0x80, 0x27, 0x3D, 0x37, 0x80, 0x27, 0x3E, 0x38, 0x80, 0x27, 0x3F,
    0x39, 0x80, 0x27, 0x40, 0x36, 0x8A, 0x27, 0x1D, 0x27, 0xDC, 0x27, 0xE0, 0x27, 0xE4, 0x27, 0xE8,
    0x27, 0xEC, 0x27, 0xF0, 0x27, 0xF4, 0x27, 0xF8, 0x27, 0xFC, 0x28, 0x00, 0x30, 0x80, 0x27, 0x41,
    0x31, 0x80, 0x27, 0x42, 0x32, 0x80, 0x27, 0x43, 0x33, 0x80, 0x27, 0x44, 0x34, 0x80, 0x27, 0x45,
    0x35, 0x80, 0x27, 0x46, 0x36, 0x80, 0x27, 0x47, 0x37, 0x80, 0x27, 0x48, 0x38, 0x80, 0x27, 0x49,
    0x39, 0x80, 0x27, 0x4A, 0x37, 0x8A, 0x27, 0x1E, 0x28, 0x1C, 0x28, 0x20, 0x28, 0x24, 0x28, 0x28,
    0x28, 0x2C, 0x28, 0x30, 0x28, 0x34, 0x28, 0x38, 0x28, 0x3C, 0x28, 0x40, 0x30, 0x80, 0x27, 0x4B,
    0x31, 0x80, 0x25, 0xCF, 0x32, 0x80, 0x27, 0x4D, 0x33, 0x80, 0x25, 0xA0, 0x34, 0x80, 0x27, 0x4F,
    0x35, 0x80, 0x27, 0x51, 0x36, 0x80, 0x25, 0xB2, 0x37, 0x80, 0x25, 0xBC, 0x38, 0x80, 0x25, 0xC6,
    0x39, 0x80, 0x27, 0x56, 0x38, 0x89, 0x27, 0x1F, 0x28, 0x5A, 0x28, 0x5E, 0x28, 0x62, 0x28, 0x66,
    0x28, 0x6A, 0x28, 0x6E, 0x28, 0x72, 0x28, 0x76, 0x28, 0x7A, 0x31, 0x80, 0x25, 0xD7, 0x32, 0x80,
    0x27, 0x58, 0x33, 0x80, 0x27, 0x59, 0x34, 0x80, 0x27, 0x5A, 0x35, 0x80, 0x27, 0x6F, 0x36, 0x80,
    0x27, 0x71, 0x37, 0x80, 0x27, 0x72, 0x38, 0x80, 0x27, 0x73, 0x39, 0x80, 0x27, 0x68, 0x39, 0x8A,
    0x27, 0x20, 0x28, 0x96, 0x28, 0x9A, 0x28, 0x9E, 0x28, 0xA2, 0x28, 0xA6, 0x28, 0xAA, 0x28, 0xAE,
    0x28, 0xB2, 0x28, 0xB6, 0x28, 0xBA, 0x30, 0x80, 0x27, 0x69, 0x31, 0x80, 0x27, 0x6C, 0x32, 0x80,
    0x27, 0x6D, 0x33, 0x80, 0x27, 0x6A, 0x34, 0x80, 0x27, 0x6B, 0x35, 0x80, 0x27, 0x74, 0x36, 0x80,
    0x27, 0x75, 0x37, 0x80, 0x27, 0x5B, 0x38, 0x80, 0x27, 0x5C, 0x39, 0x80, 0x27, 0x5D, 0x61, 0x07,
    0x28, 0xCE, 0x28, 0xD8, 0x28, 0xDF, 0x28, 0xE6, 0x28, 0xFF, 0x29, 0x0F, 0x29, 0x1A, 0xE2, 0xE5,
    0xEE, 0xE7, 0xE1, 0xEC, 0x69, 0x80, 0x09, 0x86, 0xE3, 0xF5, 0xF4, 0x65, 0x80, 0x00, 0xE1, 0xE4,
    0xE5, 0xF6, 0x61, 0x80, 0x09, 0x06, 0xE7, 0x75, 0x02, 0x28, 0xED, 0x28, 0xF6, 0xEA, 0xE1, 0xF2,
    0xE1, 0xF4, 0x69, 0x80, 0x0A, 0x86, 0xF2, 0xED, 0xF5, 0xEB, 0xE8, 0x69, 0x80, 0x0A, 0x06, 0xED,
    0xE1, 0xF4, 0xF2, 0xE1, 0xE7, 0xF5, 0xF2, 0xED, 0xF5, 0xEB, 0xE8, 0x69, 0x80, 0x0A, 0x3E, 0xF2,
    0xF5, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0x03, 0xF6, 0xEF, 0xF7, 0xE5, 0xEC, 0xF3,
    0xE9, 0xE7, 0x6E, 0x03, 0x29, 0x2A, 0x29, 0x34, 0x29, 0x3B, 0xE2, 0xE5, 0xEE, 0xE7, 0xE1, 0xEC,
    0x69, 0x80, 0x09, 0xBE, 0xE4, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x3E, 0xE7, 0xF5, 0xEA, 0xE1, 0xF2,
    0xE1, 0xF4, 0x69, 0x80, 0x0A, 0xBE, 0x62, 0x04, 0x29, 0x50, 0x29, 0x79, 0x29, 0x82, 0x29, 0x8C,
    0xE2, 0xF2, 0xE5, 0xF6, 0xE9, 0xE1, 0xF4, 0xE9, 0xEF, 0x6E, 0x02, 0x29, 0x5F, 0x29, 0x6E, 0xED,
    0xE1, 0xF2, 0xEB, 0xE1, 0xF2, 0xED, 0xE5, 0xEE, 0xE9, 0xE1, 0x6E, 0x80, 0x05, 0x5F, 0xF3, 0xE9,
    0xE7, 0xEE, 0xE4, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x70, 0xE5, 0xEE, 0xE7, 0xE1, 0xEC, 0x69, 0x80,
    0x09, 0x85, 0xEF, 0xF0, 0xEF, 0xED, 0xEF, 0xE6, 0x6F, 0x80, 0x31, 0x1A, 0xF2, 0xE5, 0xF6, 0x65,
    0x86, 0x01, 0x03, 0x29, 0x9F, 0x29, 0xA7, 0x29, 0xB2, 0x29, 0xBD, 0x29, 0xC5, 0x29, 0xD1, 0xE1,
    0xE3, 0xF5, 0xF4, 0x65, 0x80, 0x1E, 0xAF, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80,
    0x04, 0xD1, 0xE4, 0xEF, 0xF4, 0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E, 0xB7, 0xE7, 0xF2, 0xE1,
    0xF6, 0x65, 0x80, 0x1E, 0xB1, 0xE8, 0xEF, 0xEF, 0xEB, 0xE1, 0xE2, 0xEF, 0xF6, 0x65, 0x80, 0x1E,
    0xB3, 0xF4, 0xE9, 0xEC, 0xE4, 0x65, 0x80, 0x1E, 0xB5, 0x63, 0x04, 0x29, 0xE3, 0x29, 0xEA, 0x2A,
    0x39, 0x2A, 0x7F, 0xE1, 0xF2, 0xEF, 0x6E, 0x80, 0x01, 0xCE, 0xE9, 0xF2, 0x63, 0x02, 0x29, 0xF2,
    0x29, 0xF7, 0xEC, 0x65, 0x80, 0x24, 0xD0, 0xF5, 0xED, 0xE6, 0xEC, 0xE5, 0x78, 0x85, 0x00, 0xE2,
    0x2A, 0x0A, 0x2A, 0x12, 0x2A, 0x1D, 0x2A, 0x25, 0x2A, 0x31, 0xE1, 0xE3, 0xF5, 0xF4, 0x65, 0x80,
    0x1E, 0xA5, 0xE4, 0xEF, 0xF4, 0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E, 0xAD, 0xE7, 0xF2, 0xE1,
    0xF6, 0x65, 0x80, 0x1E, 0xA7, 0xE8, 0xEF, 0xEF, 0xEB, 0xE1, 0xE2, 0xEF, 0xF6, 0x65, 0x80, 0x1E,
    0xA9, 0xF4, 0xE9, 0xEC, 0xE4, 0x65, 0x80, 0x1E, 0xAB, 0xF5, 0xF4, 0x65, 0x85, 0x00, 0xB4, 0x2A,
    0x49, 0x2A, 0x54, 0x2A, 0x65, 0x2A, 0x6C, 0x2A, 0x75, 0xE2, 0xE5, 0xEC, 0xEF, 0xF7, 0xE3, 0xED,
    0x62, 0x80, 0x03, 0x17, 0x63, 0x02, 0x2A, 0x5A, 0x2A, 0x5F, 0xED, 0x62, 0x80, 0x03, 0x01, 0xEF,
    0xED, 0x62, 0x80, 0x03, 0x01, 0xE4, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x54, 0xEC, 0xEF, 0xF7, 0xED,
    0xEF, 0x64, 0x80, 0x02, 0xCF, 0xF4, 0xEF, 0xEE, 0xE5, 0xE3, 0xED, 0x62, 0x80, 0x03, 0x41, 0xF9,
    0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x30, 0x64, 0x05, 0x2A, 0x95, 0x2A, 0x9F, 0x2A,
    0xAD, 0x2A, 0xB3, 0x2A, 0xD5, 0xE2, 0xEC, 0xE7, 0xF2, 0xE1, 0xF6, 0x65, 0x80, 0x02, 0x01, 0xE4,
    0xE1, 0xEB, 0xE7, 0xF5, 0xF2, 0xED, 0xF5, 0xEB, 0xE8, 0x69, 0x80, 0x0A, 0x71, 0xE5, 0xF6, 0x61,
    0x80, 0x09, 0x05, 0xE9, 0xE5, 0xF2, 0xE5, 0xF3, 0xE9, 0x73, 0x82, 0x00, 0xE4, 0x2A, 0xC1, 0x2A,
    0xCC, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0xD3, 0xED, 0xE1, 0xE3, 0xF2,
    0xEF, 0x6E, 0x80, 0x01, 0xDF, 0xEF, 0x74, 0x02, 0x2A, 0xDC, 0x2A, 0xE4, 0xE2, 0xE5, 0xEC, 0xEF,
    0x77, 0x80, 0x1E, 0xA1, 0xED, 0xE1, 0xE3, 0xF2, 0xEF, 0x6E, 0x80, 0x01, 0xE1, 0x65, 0x83, 0x00,
    0xE6, 0x2A, 0xF7, 0x2A, 0xFF, 0x2B, 0x08, 0xE1, 0xE3, 0xF5, 0xF4, 0x65, 0x80, 0x01, 0xFD, 0xEB,
    0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31, 0x50, 0xED, 0xE1, 0xE3, 0xF2, 0xEF, 0x6E, 0x80, 0x01,
    0xE3, 0xE6, 0xE9, 0x69, 0x06, 0x2B, 0x21, 0x2B, 0x35, 0x2D, 0xF6, 0x2D, 0xFC, 0x2E, 0x0B, 0x31,
    0x6F, 0x30, 0x02, 0x2B, 0x27, 0x2B, 0x2E, 0xB0, 0xB2, 0xB0, 0x38, 0x80, 0x20, 0x15, 0xB8, 0xB9,
    0xB4, 0x31, 0x80, 0x20, 0xA4, 0xB1, 0x30, 0x03, 0x2B, 0x3E, 0x2D, 0x56, 0x2D, 0xDD, 0x30, 0x09,
    0x2B, 0x52, 0x2B, 0x66, 0x2B, 0xA4, 0x2B, 0xE2, 0x2C, 0x20, 0x2C, 0x5E, 0x2C, 0x9C, 0x2C, 0xDA,
    0x2D, 0x18, 0x31, 0x03, 0x2B, 0x5A, 0x2B, 0x5E, 0x2B, 0x62, 0x37, 0x80, 0x04, 0x10, 0x38, 0x80,
    0x04, 0x11, 0x39, 0x80, 0x04, 0x12, 0x32, 0x0A, 0x2B, 0x7C, 0x2B, 0x80, 0x2B, 0x84, 0x2B, 0x88,
    0x2B, 0x8C, 0x2B, 0x90, 0x2B, 0x94, 0x2B, 0x98, 0x2B, 0x9C, 0x2B, 0xA0, 0x30, 0x80, 0x04, 0x13,
    0x31, 0x80, 0x04, 0x14, 0x32, 0x80, 0x04, 0x15, 0x33, 0x80, 0x04, 0x01, 0x34, 0x80, 0x04, 0x16,
    0x35, 0x80, 0x04, 0x17, 0x36, 0x80, 0x04, 0x18, 0x37, 0x80, 0x04, 0x19, 0x38, 0x80, 0x04, 0x1A,
    0x39, 0x80, 0x04, 0x1B, 0x33, 0x0A, 0x2B, 0xBA, 0x2B, 0xBE, 0x2B, 0xC2, 0x2B, 0xC6, 0x2B, 0xCA,
    0x2B, 0xCE, 0x2B, 0xD2, 0x2B, 0xD6, 0x2B, 0xDA, 0x2B, 0xDE, 0x30, 0x80, 0x04, 0x1C, 0x31, 0x80,
    0x04, 0x1D, 0x32, 0x80, 0x04, 0x1E, 0x33, 0x80, 0x04, 0x1F, 0x34, 0x80, 0x04, 0x20, 0x35, 0x80,
    0x04, 0x21, 0x36, 0x80, 0x04, 0x22, 0x37, 0x80, 0x04, 0x23, 0x38, 0x80, 0x04, 0x24, 0x39, 0x80,
    0x04, 0x25, 0x34, 0x0A, 0x2B, 0xF8, 0x2B, 0xFC, 0x2C, 0x00, 0x2C, 0x04, 0x2C, 0x08, 0x2C, 0x0C,
    0x2C, 0x10, 0x2C, 0x14, 0x2C, 0x18, 0x2C, 0x1C, 0x30, 0x80, 0x04, 0x26, 0x31, 0x80, 0x04, 0x27,
    0x32, 0x80, 0x04, 0x28, 0x33, 0x80, 0x04, 0x29, 0x34, 0x80, 0x04, 0x2A, 0x35, 0x80, 0x04, 0x2B,
    0x36, 0x80, 0x04, 0x2C, 0x37, 0x80, 0x04, 0x2D, 0x38, 0x80, 0x04, 0x2E, 0x39, 0x80, 0x04, 0x2F,
    0x35, 0x0A, 0x2C, 0x36, 0x2C, 0x3A, 0x2C, 0x3E, 0x2C, 0x42, 0x2C, 0x46, 0x2C, 0x4A, 0x2C, 0x4E,
    0x2C, 0x52, 0x2C, 0x56, 0x2C, 0x5A, 0x30, 0x80, 0x04, 0x90, 0x31, 0x80, 0x04, 0x02, 0x32, 0x80,
    0x04, 0x03, 0x33, 0x80, 0x04, 0x04, 0x34, 0x80, 0x04, 0x05, 0x35, 0x80, 0x04, 0x06, 0x36, 0x80,
    0x04, 0x07, 0x37, 0x80, 0x04, 0x08, 0x38, 0x80, 0x04, 0x09, 0x39, 0x80, 0x04, 0x0A, 0x36, 0x0A,
    0x2C, 0x74, 0x2C, 0x78, 0x2C, 0x7C, 0x2C, 0x80, 0x2C, 0x84, 0x2C, 0x88, 0x2C, 0x8C, 0x2C, 0x90,
    0x2C, 0x94, 0x2C, 0x98, 0x30, 0x80, 0x04, 0x0B, 0x31, 0x80, 0x04, 0x0C, 0x32, 0x80, 0x04, 0x0E,
    0x33, 0x80, 0xF6, 0xC4, 0x34, 0x80, 0xF6, 0xC5, 0x35, 0x80, 0x04, 0x30, 0x36, 0x80, 0x04, 0x31,
    0x37, 0x80, 0x04, 0x32, 0x38, 0x80, 0x04, 0x33, 0x39, 0x80, 0x04, 0x34, 0x37, 0x0A, 0x2C, 0xB2,
    0x2C, 0xB6, 0x2C, 0xBA, 0x2C, 0xBE, 0x2C, 0xC2, 0x2C, 0xC6, 0x2C, 0xCA, 0x2C, 0xCE, 0x2C, 0xD2,
    0x2C, 0xD6, 0x30, 0x80, 0x04, 0x35, 0x31, 0x80, 0x04, 0x51, 0x32, 0x80, 0x04, 0x36, 0x33, 0x80,
    0x04, 0x37, 0x34, 0x80, 0x04, 0x38, 0x35, 0x80, 0x04, 0x39, 0x36, 0x80, 0x04, 0x3A, 0x37, 0x80,
    0x04, 0x3B, 0x38, 0x80, 0x04, 0x3C, 0x39, 0x80, 0x04, 0x3D, 0x38, 0x0A, 0x2C, 0xF0, 0x2C, 0xF4,
    0x2C, 0xF8, 0x2C, 0xFC, 0x2D, 0x00, 0x2D, 0x04, 0x2D, 0x08, 0x2D, 0x0C, 0x2D, 0x10, 0x2D, 0x14,
    0x30, 0x80, 0x04, 0x3E, 0x31, 0x80, 0x04, 0x3F, 0x32, 0x80, 0x04, 0x40, 0x33, 0x80, 0x04, 0x41,
    0x34, 0x80, 0x04, 0x42, 0x35, 0x80, 0x04, 0x43, 0x36, 0x80, 0x04, 0x44, 0x37, 0x80, 0x04, 0x45,
    0x38, 0x80, 0x04, 0x46, 0x39, 0x80, 0x04, 0x47, 0x39, 0x0A, 0x2D, 0x2E, 0x2D, 0x32, 0x2D, 0x36,
    0x2D, 0x3A, 0x2D, 0x3E, 0x2D, 0x42, 0x2D, 0x46, 0x2D, 0x4A, 0x2D, 0x4E, 0x2D, 0x52, 0x30, 0x80,
    0x04, 0x48, 0x31, 0x80, 0x04, 0x49, 0x32, 0x80, 0x04, 0x4A, 0x33, 0x80, 0x04, 0x4B, 0x34, 0x80,
    0x04, 0x4C, 0x35, 0x80, 0x04, 0x4D, 0x36, 0x80, 0x04, 0x4E, 0x37, 0x80, 0x04, 0x4F, 0x38, 0x80,
    0x04, 0x91, 0x39, 0x80, 0x04, 0x52, 0x31, 0x04, 0x2D, 0x60, 0x2D, 0x9E, 0x2D, 0xA3, 0x2D, 0xBD,
    0x30, 0x0A, 0x2D, 0x76, 0x2D, 0x7A, 0x2D, 0x7E, 0x2D, 0x82, 0x2D, 0x86, 0x2D, 0x8A, 0x2D, 0x8E,
    0x2D, 0x92, 0x2D, 0x96, 0x2D, 0x9A, 0x30, 0x80, 0x04, 0x53, 0x31, 0x80, 0x04, 0x54, 0x32, 0x80,
    0x04, 0x55, 0x33, 0x80, 0x04, 0x56, 0x34, 0x80, 0x04, 0x57, 0x35, 0x80, 0x04, 0x58, 0x36, 0x80,
    0x04, 0x59, 0x37, 0x80, 0x04, 0x5A, 0x38, 0x80, 0x04, 0x5B, 0x39, 0x80, 0x04, 0x5C, 0xB1, 0x30,
    0x80, 0x04, 0x5E, 0x34, 0x04, 0x2D, 0xAD, 0x2D, 0xB1, 0x2D, 0xB5, 0x2D, 0xB9, 0x35, 0x80, 0x04,
    0x0F, 0x36, 0x80, 0x04, 0x62, 0x37, 0x80, 0x04, 0x72, 0x38, 0x80, 0x04, 0x74, 0x39, 0x05, 0x2D,
    0xC9, 0x2D, 0xCD, 0x2D, 0xD1, 0x2D, 0xD5, 0x2D, 0xD9, 0x32, 0x80, 0xF6, 0xC6, 0x33, 0x80, 0x04,
    0x5F, 0x34, 0x80, 0x04, 0x63, 0x35, 0x80, 0x04, 0x73, 0x36, 0x80, 0x04, 0x75, 0x38, 0x02, 0x2D,
    0xE3, 0x2D, 0xF1, 0x33, 0x02, 0x2D, 0xE9, 0x2D, 0xED, 0x31, 0x80, 0xF6, 0xC7, 0x32, 0x80, 0xF6,
    0xC8, 0xB4, 0x36, 0x80, 0x04, 0xD9, 0xB2, 0xB9, 0x39, 0x80, 0x20, 0x0E, 0xB3, 0x30, 0x02, 0x2E,
    0x03, 0x2E, 0x07, 0x30, 0x80, 0x20, 0x0F, 0x31, 0x80, 0x20, 0x0D, 0xB5, 0x37, 0x07, 0x2E, 0x1C,
    0x2E, 0x62, 0x2F, 0xA3, 0x2F, 0xF0, 0x30, 0xC5, 0x31, 0x22, 0x31, 0x69, 0x33, 0x02, 0x2E, 0x22,
    0x2E, 0x30, 0x38, 0x02, 0x2E, 0x28, 0x2E, 0x2C, 0x31, 0x80, 0x06, 0x6A, 0x38, 0x80, 0x06, 0x0C,
    0x39, 0x08, 0x2E, 0x42, 0x2E, 0x46, 0x2E, 0x4A, 0x2E, 0x4E, 0x2E, 0x52, 0x2E, 0x56, 0x2E, 0x5A,
    0x2E, 0x5E, 0x32, 0x80, 0x06, 0x60, 0x33, 0x80, 0x06, 0x61, 0x34, 0x80, 0x06, 0x62, 0x35, 0x80,
    0x06, 0x63, 0x36, 0x80, 0x06, 0x64, 0x37, 0x80, 0x06, 0x65, 0x38, 0x80, 0x06, 0x66, 0x39, 0x80,
    0x06, 0x67, 0x34, 0x07, 0x2E, 0x72, 0x2E, 0x92, 0x2E, 0xD0, 0x2F, 0x0E, 0x2F, 0x2E, 0x2F, 0x66,
    0x2F, 0x9E, 0x30, 0x05, 0x2E, 0x7E, 0x2E, 0x82, 0x2E, 0x86, 0x2E, 0x8A, 0x2E, 0x8E, 0x30, 0x80,
    0x06, 0x68, 0x31, 0x80, 0x06, 0x69, 0x33, 0x80, 0x06, 0x1B, 0x37, 0x80, 0x06, 0x1F, 0x39, 0x80,
    0x06, 0x21, 0x31, 0x0A, 0x2E, 0xA8, 0x2E, 0xAC, 0x2E, 0xB0, 0x2E, 0xB4, 0x2E, 0xB8, 0x2E, 0xBC,
    0x2E, 0xC0, 0x2E, 0xC4, 0x2E, 0xC8, 0x2E, 0xCC, 0x30, 0x80, 0x06, 0x22, 0x31, 0x80, 0x06, 0x23,
    0x32, 0x80, 0x06, 0x24, 0x33, 0x80, 0x06, 0x25, 0x34, 0x80, 0x06, 0x26, 0x35, 0x80, 0x06, 0x27,
    0x36, 0x80, 0x06, 0x28, 0x37, 0x80, 0x06, 0x29, 0x38, 0x80, 0x06, 0x2A, 0x39, 0x80, 0x06, 0x2B,
    0x32, 0x0A, 0x2E, 0xE6, 0x2E, 0xEA, 0x2E, 0xEE, 0x2E, 0xF2, 0x2E, 0xF6, 0x2E, 0xFA, 0x2E, 0xFE,
    0x2F, 0x02, 0x2F, 0x06, 0x2F, 0x0A, 0x30, 0x80, 0x06, 0x2C, 0x31, 0x80, 0x06, 0x2D, 0x32, 0x80,
    0x06, 0x2E, 0x33, 0x80, 0x06, 0x2F, 0x34, 0x80, 0x06, 0x30, 0x35, 0x80, 0x06, 0x31, 0x36, 0x80,
    0x06, 0x32, 0x37, 0x80, 0x06, 0x33, 0x38, 0x80, 0x06, 0x34, 0x39, 0x80, 0x06, 0x35, 0x33, 0x05,
    0x2F, 0x1A, 0x2F, 0x1E, 0x2F, 0x22, 0x2F, 0x26, 0x2F, 0x2A, 0x30, 0x80, 0x06, 0x36, 0x31, 0x80,
    0x06, 0x37, 0x32, 0x80, 0x06, 0x38, 0x33, 0x80, 0x06, 0x39, 0x34, 0x80, 0x06, 0x3A, 0x34, 0x09,
    0x2F, 0x42, 0x2F, 0x46, 0x2F, 0x4A, 0x2F, 0x4E, 0x2F, 0x52, 0x2F, 0x56, 0x2F, 0x5A, 0x2F, 0x5E,
    0x2F, 0x62, 0x30, 0x80, 0x06, 0x40, 0x31, 0x80, 0x06, 0x41, 0x32, 0x80, 0x06, 0x42, 0x33, 0x80,
    0x06, 0x43, 0x34, 0x80, 0x06, 0x44, 0x35, 0x80, 0x06, 0x45, 0x36, 0x80, 0x06, 0x46, 0x38, 0x80,
    0x06, 0x48, 0x39, 0x80, 0x06, 0x49, 0x35, 0x09, 0x2F, 0x7A, 0x2F, 0x7E, 0x2F, 0x82, 0x2F, 0x86,
    0x2F, 0x8A, 0x2F, 0x8E, 0x2F, 0x92, 0x2F, 0x96, 0x2F, 0x9A, 0x30, 0x80, 0x06, 0x4A, 0x31, 0x80,
    0x06, 0x4B, 0x32, 0x80, 0x06, 0x4C, 0x33, 0x80, 0x06, 0x4D, 0x34, 0x80, 0x06, 0x4E, 0x35, 0x80,
    0x06, 0x4F, 0x36, 0x80, 0x06, 0x50, 0x37, 0x80, 0x06, 0x51, 0x38, 0x80, 0x06, 0x52, 0xB7, 0x30,
    0x80, 0x06, 0x47, 0x35, 0x03, 0x2F, 0xAB, 0x2F, 0xCB, 0x2F, 0xEB, 0x30, 0x05, 0x2F, 0xB7, 0x2F,
    0xBB, 0x2F, 0xBF, 0x2F, 0xC3, 0x2F, 0xC7, 0x35, 0x80, 0x06, 0xA4, 0x36, 0x80, 0x06, 0x7E, 0x37,
    0x80, 0x06, 0x86, 0x38, 0x80, 0x06, 0x98, 0x39, 0x80, 0x06, 0xAF, 0x31, 0x05, 0x2F, 0xD7, 0x2F,
    0xDB, 0x2F, 0xDF, 0x2F, 0xE3, 0x2F, 0xE7, 0x31, 0x80, 0x06, 0x79, 0x32, 0x80, 0x06, 0x88, 0x33,
    0x80, 0x06, 0x91, 0x34, 0x80, 0x06, 0xBA, 0x39, 0x80, 0x06, 0xD2, 0xB3, 0x34, 0x80, 0x06, 0xD5,
    0x36, 0x07, 0x30, 0x00, 0x30, 0x05, 0x30, 0x0A, 0x30, 0x0F, 0x30, 0x35, 0x30, 0x73, 0x30, 0xB1,
    0xB3, 0x36, 0x80, 0x20, 0xAA, 0xB4, 0x35, 0x80, 0x05, 0xBE, 0xB5, 0x38, 0x80, 0x05, 0xC3, 0x36,
    0x06, 0x30, 0x1D, 0x30, 0x21, 0x30, 0x25, 0x30, 0x29, 0x30, 0x2D, 0x30, 0x31, 0x34, 0x80, 0x05,
    0xD0, 0x35, 0x80, 0x05, 0xD1, 0x36, 0x80, 0x05, 0xD2, 0x37, 0x80, 0x05, 0xD3, 0x38, 0x80, 0x05,
    0xD4, 0x39, 0x80, 0x05, 0xD5, 0x37, 0x0A, 0x30, 0x4B, 0x30, 0x4F, 0x30, 0x53, 0x30, 0x57, 0x30,
    0x5B, 0x30, 0x5F, 0x30, 0x63, 0x30, 0x67, 0x30, 0x6B, 0x30, 0x6F, 0x30, 0x80, 0x05, 0xD6, 0x31,
    0x80, 0x05, 0xD7, 0x32, 0x80, 0x05, 0xD8, 0x33, 0x80, 0x05, 0xD9, 0x34, 0x80, 0x05, 0xDA, 0x35,
    0x80, 0x05, 0xDB, 0x36, 0x80, 0x05, 0xDC, 0x37, 0x80, 0x05, 0xDD, 0x38, 0x80, 0x05, 0xDE, 0x39,
    0x80, 0x05, 0xDF, 0x38, 0x0A, 0x30, 0x89, 0x30, 0x8D, 0x30, 0x91, 0x30, 0x95, 0x30, 0x99, 0x30,
    0x9D, 0x30, 0xA1, 0x30, 0xA5, 0x30, 0xA9, 0x30, 0xAD, 0x30, 0x80, 0x05, 0xE0, 0x31, 0x80, 0x05,
    0xE1, 0x32, 0x80, 0x05, 0xE2, 0x33, 0x80, 0x05, 0xE3, 0x34, 0x80, 0x05, 0xE4, 0x35, 0x80, 0x05,
    0xE5, 0x36, 0x80, 0x05, 0xE6, 0x37, 0x80, 0x05, 0xE7, 0x38, 0x80, 0x05, 0xE8, 0x39, 0x80, 0x05,
    0xE9, 0x39, 0x03, 0x30, 0xB9, 0x30, 0xBD, 0x30, 0xC1, 0x30, 0x80, 0x05, 0xEA, 0x34, 0x80, 0xFB,
    0x2A, 0x35, 0x80, 0xFB, 0x2B, 0x37, 0x04, 0x30, 0xCF, 0x30, 0xDD, 0x30, 0xF1, 0x30, 0xF6, 0x30,
    0x02, 0x30, 0xD5, 0x30, 0xD9, 0x30, 0x80, 0xFB, 0x4B, 0x35, 0x80, 0xFB, 0x1F, 0x31, 0x03, 0x30,
    0xE5, 0x30, 0xE9, 0x30, 0xED, 0x36, 0x80, 0x05, 0xF0, 0x37, 0x80, 0x05, 0xF1, 0x38, 0x80, 0x05,
    0xF2, 0xB2, 0x33, 0x80, 0xFB, 0x35, 0x39, 0x07, 0x31, 0x06, 0x31, 0x0A, 0x31, 0x0E, 0x31, 0x12,
    0x31, 0x16, 0x31, 0x1A, 0x31, 0x1E, 0x33, 0x80, 0x05, 0xB4, 0x34, 0x80, 0x05, 0xB5, 0x35, 0x80,
    0x05, 0xB6, 0x36, 0x80, 0x05, 0xBB, 0x37, 0x80, 0x05, 0xB8, 0x38, 0x80, 0x05, 0xB7, 0x39, 0x80,
    0x05, 0xB0, 0x38, 0x03, 0x31, 0x2A, 0x31, 0x56, 0x31, 0x5B, 0x30, 0x07, 0x31, 0x3A, 0x31, 0x3E,
    0x31, 0x42, 0x31, 0x46, 0x31, 0x4A, 0x31, 0x4E, 0x31, 0x52, 0x30, 0x80, 0x05, 0xB2, 0x31, 0x80,
    0x05, 0xB1, 0x32, 0x80, 0x05, 0xB3, 0x33, 0x80, 0x05, 0xC2, 0x34, 0x80, 0x05, 0xC1, 0x36, 0x80,
    0x05, 0xB9, 0x37, 0x80, 0x05, 0xBC, 0xB3, 0x39, 0x80, 0x05, 0xBD, 0x34, 0x02, 0x31, 0x61, 0x31,
    0x65, 0x31, 0x80, 0x05, 0xBF, 0x32, 0x80, 0x05, 0xC0, 0xB9, 0xB2, 0x39, 0x80, 0x02, 0xBC, 0x36,
    0x03, 0x31, 0x77, 0x31, 0xB2, 0x31, 0xB9, 0x31, 0x04, 0x31, 0x81, 0x31, 0x91, 0x31, 0x97, 0x31,
    0xAC, 0x32, 0x02, 0x31, 0x87, 0x31, 0x8C, 0xB4, 0x38, 0x80, 0x21, 0x05, 0xB8, 0x39, 0x80, 0x21,
    0x13, 0xB3, 0xB5, 0x32, 0x80, 0x21, 0x16, 0xB5, 0x37, 0x03, 0x31, 0xA0, 0x31, 0xA4, 0x31, 0xA8,
    0x33, 0x80, 0x20, 0x2C, 0x34, 0x80, 0x20, 0x2D, 0x35, 0x80, 0x20, 0x2E, 0xB6, 0xB6, 0x34, 0x80,
    0x20, 0x0C, 0xB3, 0xB1, 0xB6, 0x37, 0x80, 0x06, 0x6D, 0xB4, 0xB9, 0xB3, 0x37, 0x80, 0x02, 0xBD,
    0x67, 0x02, 0x31, 0xC6, 0x31, 0xCD, 0xF2, 0xE1, 0xF6, 0x65, 0x80, 0x00, 0xE0, 0x75, 0x02, 0x31,
    0xD3, 0x31, 0xDC, 0xEA, 0xE1, 0xF2, 0xE1, 0xF4, 0x69, 0x80, 0x0A, 0x85, 0xF2, 0xED, 0xF5, 0xEB,
    0xE8, 0x69, 0x80, 0x0A, 0x05, 0x68, 0x02, 0x31, 0xEB, 0x31, 0xF5, 0xE9, 0xF2, 0xE1, 0xE7, 0xE1,
    0xEE, 0x61, 0x80, 0x30, 0x42, 0xEF, 0xEF, 0xEB, 0xE1, 0xE2, 0xEF, 0xF6, 0x65, 0x80, 0x1E, 0xA3,
    0x69, 0x07, 0x32, 0x10, 0x32, 0x29, 0x32, 0x30, 0x32, 0x3C, 0x32, 0x55, 0x32, 0x65, 0x32, 0xB5,
    0x62, 0x02, 0x32, 0x16, 0x32, 0x1F, 0xE5, 0xEE, 0xE7, 0xE1, 0xEC, 0x69, 0x80, 0x09, 0x90, 0xEF,
    0xF0, 0xEF, 0xED, 0xEF, 0xE6, 0x6F, 0x80, 0x31, 0x1E, 0xE4, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x10,
    0xE5, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0xD5, 0xE7, 0x75, 0x02, 0x32,
    0x43, 0x32, 0x4C, 0xEA, 0xE1, 0xF2, 0xE1, 0xF4, 0x69, 0x80, 0x0A, 0x90, 0xF2, 0xED, 0xF5, 0xEB,
    0xE8, 0x69, 0x80, 0x0A, 0x10, 0xED, 0xE1, 0xF4, 0xF2, 0xE1, 0xE7, 0xF5, 0xF2, 0xED, 0xF5, 0xEB,
    0xE8, 0x69, 0x80, 0x0A, 0x48, 0x6E, 0x05, 0x32, 0x71, 0x32, 0x7A, 0x32, 0x88, 0x32, 0x98, 0x32,
    0xA7, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0x06, 0x39, 0xE6, 0xE9, 0xEE, 0xE1, 0xEC, 0xE1,
    0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE, 0xCA, 0xE9, 0xEE, 0xE9, 0xF4, 0xE9, 0xE1, 0xEC, 0xE1,
    0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE, 0xCB, 0xED, 0xE5, 0xE4, 0xE9, 0xE1, 0xEC, 0xE1, 0xF2,
    0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE, 0xCC, 0xF6, 0xE5, 0xF2, 0xF4, 0xE5, 0xE4, 0xE2, 0xF2, 0xE5,
    0xF6, 0x65, 0x80, 0x02, 0x03, 0xF6, 0xEF, 0xF7, 0xE5, 0xEC, 0xF3, 0xE9, 0xE7, 0x6E, 0x03, 0x32,
    0xC5, 0x32, 0xCF, 0x32, 0xD6, 0xE2, 0xE5, 0xEE, 0xE7, 0xE1, 0xEC, 0x69, 0x80, 0x09, 0xC8, 0xE4,
    0xE5, 0xF6, 0x61, 0x80, 0x09, 0x48, 0xE7, 0xF5, 0xEA, 0xE1, 0xF2, 0xE1, 0xF4, 0x69, 0x80, 0x0A,
    0xC8, 0x6B, 0x02, 0x32, 0xE7, 0x32, 0xFF, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1, 0xEE, 0x61, 0x81, 0x30,
    0xA2, 0x32, 0xF3, 0xE8, 0xE1, 0xEC, 0xE6, 0xF7, 0xE9, 0xE4, 0xF4, 0x68, 0x80, 0xFF, 0x71, 0xEF,
    0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31, 0x4F, 0x6C, 0x03, 0x33, 0x0F, 0x34, 0x47, 0x34, 0x50, 0x65,
    0x02, 0x33, 0x15, 0x34, 0x42, 0x66, 0x88, 0x05, 0xD0, 0x33, 0x29, 0x33, 0x32, 0x33, 0x41, 0x33,
    0x4F, 0x33, 0xA8, 0x33, 0xB6, 0x34, 0x25, 0x34, 0x33, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80,
    0x06, 0x27, 0xE4, 0xE1, 0xE7, 0xE5, 0xF3, 0xE8, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0xFB,
    0x30, 0xE6, 0xE9, 0xEE, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE, 0x8E, 0x68,
    0x02, 0x33, 0x55, 0x33, 0xA0, 0xE1, 0xED, 0xFA, 0x61, 0x02, 0x33, 0x5E, 0x33, 0x7F, 0xE1, 0xE2,
    0xEF, 0xF6, 0x65, 0x02, 0x33, 0x68, 0x33, 0x71, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0x06,
    0x23, 0xE6, 0xE9, 0xEE, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE, 0x84, 0xE2,
    0xE5, 0xEC, 0xEF, 0x77, 0x02, 0x33, 0x89, 0x33, 0x92, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80,
    0x06, 0x25, 0xE6, 0xE9, 0xEE, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE, 0x88,
    0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xD0, 0xEC, 0xE1, 0xED, 0xE5, 0xE4, 0xE8, 0xE5, 0xE2,
    0xF2, 0xE5, 0x77, 0x80, 0xFB, 0x4F, 0xED, 0x61, 0x02, 0x33, 0xBD, 0x33, 0xE1, 0xE4, 0xE4, 0xE1,
    0xE1, 0xE2, 0xEF, 0xF6, 0x65, 0x02, 0x33, 0xCA, 0x33, 0xD3, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63,
    0x80, 0x06, 0x22, 0xE6, 0xE9, 0xEE, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE,
    0x82, 0xEB, 0xF3, 0xF5, 0xF2, 0x61, 0x04, 0x33, 0xEF, 0x33, 0xF8, 0x34, 0x06, 0x34, 0x16, 0xE1,
    0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0x06, 0x49, 0xE6, 0xE9, 0xEE, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1,
    0xE2, 0xE9, 0x63, 0x80, 0xFE, 0xF0, 0xE9, 0xEE, 0xE9, 0xF4, 0xE9, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1,
    0xE2, 0xE9, 0x63, 0x80, 0xFE, 0xF3, 0xED, 0xE5, 0xE4, 0xE9, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2,
    0xE9, 0x63, 0x80, 0xFE, 0xF4, 0xF0, 0xE1, 0xF4, 0xE1, 0xE8, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77,
    0x80, 0xFB, 0x2E, 0xF1, 0xE1, 0xED, 0xE1, 0xF4, 0xF3, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80,
    0xFB, 0x2F, 0xF0, 0x68, 0x80, 0x21, 0x35, 0xEC, 0xE5, 0xF1, 0xF5, 0xE1, 0x6C, 0x80, 0x22, 0x4C,
    0xF0, 0xE8, 0x61, 0x81, 0x03, 0xB1, 0x34, 0x58, 0xF4, 0xEF, 0xEE, 0xEF, 0x73, 0x80, 0x03, 0xAC,
    0x6D, 0x04, 0x34, 0x6A, 0x34, 0x72, 0x34, 0x7D, 0x34, 0x9F, 0xE1, 0xE3, 0xF2, 0xEF, 0x6E, 0x80,
    0x01, 0x01, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80, 0xFF, 0x41, 0xF0, 0xE5, 0xF2,
    0xF3, 0xE1, 0xEE, 0x64, 0x82, 0x00, 0x26, 0x34, 0x8B, 0x34, 0x97, 0xED, 0xEF, 0xEE, 0xEF, 0xF3,
    0xF0, 0xE1, 0xE3, 0x65, 0x80, 0xFF, 0x06, 0xF3, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xF7, 0x26, 0xF3,
    0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0xC2, 0x6E, 0x04, 0x34, 0xB2, 0x34, 0xBD, 0x35, 0x37,
    0x35, 0x41, 0xE2, 0xEF, 0xF0, 0xEF, 0xED, 0xEF, 0xE6, 0x6F, 0x80, 0x31, 0x22, 0x67, 0x04, 0x34,
    0xC7, 0x34, 0xD2, 0x34, 0xE0, 0x35, 0x2F, 0xE2, 0xEF, 0xF0, 0xEF, 0xED, 0xEF, 0xE6, 0x6F, 0x80,
    0x31, 0x24, 0xEB, 0xE8, 0xE1, 0xEE, 0xEB, 0xE8, 0xF5, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x5A,
    0xEC, 0x65, 0x83, 0x22, 0x20, 0x34, 0xEB, 0x35, 0x20, 0x35, 0x27, 0xE2, 0xF2, 0xE1, 0xE3, 0xEB,
    0xE5, 0x74, 0x02, 0x34, 0xF7, 0x35, 0x0B, 0xEC, 0xE5, 0xE6, 0x74, 0x81, 0x30, 0x08, 0x35, 0x00,
    0xF6, 0xE5, 0xF2, 0xF4, 0xE9, 0xE3, 0xE1, 0x6C, 0x80, 0xFE, 0x3F, 0xF2, 0xE9, 0xE7, 0xE8, 0x74,
    0x81, 0x30, 0x09, 0x35, 0x15, 0xF6, 0xE5, 0xF2, 0xF4, 0xE9, 0xE3, 0xE1, 0x6C, 0x80, 0xFE, 0x40,
    0xEC, 0xE5, 0xE6, 0x74, 0x80, 0x23, 0x29, 0xF2, 0xE9, 0xE7, 0xE8, 0x74, 0x80, 0x23, 0x2A, 0xF3,
    0xF4, 0xF2, 0xEF, 0x6D, 0x80, 0x21, 0x2B, 0xEF, 0xF4, 0xE5, 0xEC, 0xE5, 0xE9, 0x61, 0x80, 0x03,
    0x87, 0x75, 0x02, 0x35, 0x47, 0x35, 0x53, 0xE4, 0xE1, 0xF4, 0xF4, 0xE1, 0xE4, 0xE5, 0xF6, 0x61,
    0x80, 0x09, 0x52, 0xF3, 0xF6, 0xE1, 0xF2, 0x61, 0x03, 0x35, 0x5F, 0x35, 0x69, 0x35, 0x70, 0xE2,
    0xE5, 0xEE, 0xE7, 0xE1, 0xEC, 0x69, 0x80, 0x09, 0x82, 0xE4, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x02,
    0xE7, 0xF5, 0xEA, 0xE1, 0xF2, 0xE1, 0xF4, 0x69, 0x80, 0x0A, 0x82, 0xEF, 0xE7, 0xEF, 0xEE, 0xE5,
    0x6B, 0x80, 0x01, 0x05, 0x70, 0x03, 0x35, 0x8C, 0x35, 0xA4, 0x35, 0xC2, 0x61, 0x02, 0x35, 0x92,
    0x35, 0x9E, 0xE1, 0xF4, 0xEF, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0x00, 0xF2, 0xE5,
    0x6E, 0x80, 0x24, 0x9C, 0xEF, 0xF3, 0xF4, 0xF2, 0xEF, 0xF0, 0xE8, 0x65, 0x02, 0x35, 0xB1, 0x35,
    0xBC, 0xE1, 0xF2, 0xED, 0xE5, 0xEE, 0xE9, 0xE1, 0x6E, 0x80, 0x05, 0x5A, 0xED, 0xEF, 0x64, 0x80,
    0x02, 0xBC, 0x70, 0x02, 0x35, 0xC8, 0x35, 0xCD, 0xEC, 0x65, 0x80, 0xF8, 0xFF, 0xF2, 0x6F, 0x02,
    0x35, 0xD4, 0x35, 0xDC, 0xE1, 0xE3, 0xE8, 0xE5, 0x73, 0x80, 0x22, 0x50, 0x78, 0x02, 0x35, 0xE2,
    0x35, 0xF6, 0xE5, 0xF1, 0xF5, 0xE1, 0x6C, 0x81, 0x22, 0x48, 0x35, 0xEC, 0xEF, 0xF2, 0xE9, 0xED,
    0xE1, 0xE7, 0x65, 0x80, 0x22, 0x52, 0xE9, 0xED, 0xE1, 0xF4, 0xE5, 0xEC, 0xF9, 0xE5, 0xF1, 0xF5,
    0xE1, 0x6C, 0x80, 0x22, 0x45, 0x72, 0x04, 0x36, 0x0F, 0x36, 0x2A, 0x36, 0x2E, 0x36, 0x5B, 0xE1,
    0xE5, 0x61, 0x02, 0x36, 0x17, 0x36, 0x21, 0xE5, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31,
    0x8E, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31, 0x8D, 0x63, 0x80, 0x23, 0x12, 0x69, 0x02,
    0x36, 0x34, 0x36, 0x42, 0xE7, 0xE8, 0xF4, 0xE8, 0xE1, 0xEC, 0xE6, 0xF2, 0xE9, 0xEE, 0x67, 0x80,
    0x1E, 0x9A, 0xEE, 0x67, 0x82, 0x00, 0xE5, 0x36, 0x4B, 0x36, 0x53, 0xE1, 0xE3, 0xF5, 0xF4, 0x65,
    0x80, 0x01, 0xFB, 0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E, 0x01, 0xF2, 0xEF, 0x77, 0x08, 0x36,
    0x6F, 0x36, 0x76, 0x36, 0xF7, 0x37, 0x39, 0x37, 0x6B, 0x37, 0xA2, 0x37, 0xB9, 0x38, 0x04, 0xE2,
    0xEF, 0xF4, 0x68, 0x80, 0x21, 0x94, 0x64, 0x03, 0x36, 0x7E, 0x36, 0xA5, 0x36, 0xD4, 0xE1, 0xF3,
    0x68, 0x04, 0x36, 0x8A, 0x36, 0x91, 0x36, 0x98, 0x36, 0xA0, 0xE4, 0xEF, 0xF7, 0x6E, 0x80, 0x21,
    0xE3, 0xEC, 0xE5, 0xE6, 0x74, 0x80, 0x21, 0xE0, 0xF2, 0xE9, 0xE7, 0xE8, 0x74, 0x80, 0x21, 0xE2,
    0xF5, 0x70, 0x80, 0x21, 0xE1, 0xE2, 0x6C, 0x05, 0x36, 0xB2, 0x36, 0xB9, 0x36, 0xC0, 0x36, 0xC7,
    0x36, 0xCF, 0xE2, 0xEF, 0xF4, 0x68, 0x80, 0x21, 0xD4, 0xE4, 0xEF, 0xF7, 0x6E, 0x80, 0x21, 0xD3,
    0xEC, 0xE5, 0xE6, 0x74, 0x80, 0x21, 0xD0, 0xF2, 0xE9, 0xE7, 0xE8, 0x74, 0x80, 0x21, 0xD2, 0xF5,
    0x70, 0x80, 0x21, 0xD1, 0xEF, 0xF7, 0x6E, 0x83, 0x21, 0x93, 0x36, 0xE0, 0x36, 0xE7, 0x36, 0xEF,
    0xEC, 0xE5, 0xE6, 0x74, 0x80, 0x21, 0x99, 0xF2, 0xE9, 0xE7, 0xE8, 0x74, 0x80, 0x21, 0x98, 0xF7,
    0xE8, 0xE9, 0xF4, 0x65, 0x80, 0x21, 0xE9, 0x68, 0x02, 0x36, 0xFD, 0x37, 0x30, 0xE5, 0xE1, 0x64,
    0x04, 0x37, 0x09, 0x37, 0x13, 0x37, 0x1D, 0x37, 0x28, 0xE4, 0xEF, 0xF7, 0xEE, 0xED, 0xEF, 0x64,
    0x80, 0x02, 0xC5, 0xEC, 0xE5, 0xE6, 0xF4, 0xED, 0xEF, 0x64, 0x80, 0x02, 0xC2, 0xF2, 0xE9, 0xE7,
    0xE8, 0xF4, 0xED, 0xEF, 0x64, 0x80, 0x02, 0xC3, 0xF5, 0xF0, 0xED, 0xEF, 0x64, 0x80, 0x02, 0xC4,
    0xEF, 0xF2, 0xE9, 0xFA, 0xE5, 0x78, 0x80, 0xF8, 0xE7, 0xEC, 0xE5, 0xE6, 0x74, 0x83, 0x21, 0x90,
    0x37, 0x46, 0x37, 0x57, 0x37, 0x63, 0xE4, 0xE2, 0x6C, 0x81, 0x21, 0xD0, 0x37, 0x4E, 0xF3, 0xF4,
    0xF2, 0xEF, 0xEB, 0x65, 0x80, 0x21, 0xCD, 0xEF, 0xF6, 0xE5, 0xF2, 0xF2, 0xE9, 0xE7, 0xE8, 0x74,
    0x80, 0x21, 0xC6, 0xF7, 0xE8, 0xE9, 0xF4, 0x65, 0x80, 0x21, 0xE6, 0xF2, 0xE9, 0xE7, 0xE8, 0x74,
    0x84, 0x21, 0x92, 0x37, 0x7B, 0x37, 0x87, 0x37, 0x8F, 0x37, 0x9A, 0xE4, 0xE2, 0xEC, 0xF3, 0xF4,
    0xF2, 0xEF, 0xEB, 0x65, 0x80, 0x21, 0xCF, 0xE8, 0xE5, 0xE1, 0xF6, 0x79, 0x80, 0x27, 0x9E, 0xEF,
    0xF6, 0xE5, 0xF2, 0xEC, 0xE5, 0xE6, 0x74, 0x80, 0x21, 0xC4, 0xF7, 0xE8, 0xE9, 0xF4, 0x65, 0x80,
    0x21, 0xE8, 0xF4, 0xE1, 0x62, 0x02, 0x37, 0xAA, 0x37, 0xB1, 0xEC, 0xE5, 0xE6, 0x74, 0x80, 0x21,
    0xE4, 0xF2, 0xE9, 0xE7, 0xE8, 0x74, 0x80, 0x21, 0xE5, 0xF5, 0x70, 0x84, 0x21, 0x91, 0x37, 0xC6,
    0x37, 0xE2, 0x37, 0xF4, 0x37, 0xFC, 0x64, 0x02, 0x37, 0xCC, 0x37, 0xD8, 0x6E, 0x81, 0x21, 0x95,
    0x37, 0xD2, 0xE2, 0xF3, 0x65, 0x80, 0x21, 0xA8, 0xEF, 0xF7, 0xEE, 0xE2, 0xE1, 0xF3, 0x65, 0x80,
    0x21, 0xA8, 0xEC, 0xE5, 0xE6, 0x74, 0x81, 0x21, 0x96, 0x37, 0xEB, 0xEF, 0xE6, 0xE4, 0xEF, 0xF7,
    0x6E, 0x80, 0x21, 0xC5, 0xF2, 0xE9, 0xE7, 0xE8, 0x74, 0x80, 0x21, 0x97, 0xF7, 0xE8, 0xE9, 0xF4,
    0x65, 0x80, 0x21, 0xE7, 0xF6, 0xE5, 0xF2, 0xF4, 0xE5, 0x78, 0x80, 0xF8, 0xE6, 0x73, 0x05, 0x38,
    0x19, 0x38, 0x65, 0x38, 0x92, 0x38, 0xE5, 0x38, 0xEF, 0x63, 0x02, 0x38, 0x1F, 0x38, 0x53, 0xE9,
    0x69, 0x02, 0x38, 0x26, 0x38, 0x3D, 0xE3, 0xE9, 0xF2, 0xE3, 0xF5, 0x6D, 0x81, 0x00, 0x5E, 0x38,
    0x31, 0xED, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80, 0xFF, 0x3E, 0xF4, 0xE9, 0xEC,
    0xE4, 0x65, 0x81, 0x00, 0x7E, 0x38, 0x47, 0xED, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65,
    0x80, 0xFF, 0x5E, 0xF2, 0xE9, 0xF0, 0x74, 0x81, 0x02, 0x51, 0x38, 0x5C, 0xF4, 0xF5, 0xF2, 0xEE,
    0xE5, 0x64, 0x80, 0x02, 0x52, 0xED, 0xE1, 0xEC, 0x6C, 0x02, 0x38, 0x6E, 0x38, 0x79, 0xE8, 0xE9,
    0xF2, 0xE1, 0xE7, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0x41, 0xEB, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1, 0xEE,
    0x61, 0x81, 0x30, 0xA1, 0x38, 0x86, 0xE8, 0xE1, 0xEC, 0xE6, 0xF7, 0xE9, 0xE4, 0xF4, 0x68, 0x80,
    0xFF, 0x67, 0xF4, 0xE5, 0xF2, 0xE9, 0x73, 0x02, 0x38, 0x9C, 0x38, 0xE1, 0x6B, 0x83, 0x00, 0x2A,
    0x38, 0xA6, 0x38, 0xC2, 0x38, 0xD9, 0x61, 0x02, 0x38, 0xAC, 0x38, 0xBA, 0xEC, 0xF4, 0xEF, 0xEE,
    0xE5, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0x06, 0x6D, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80,
    0x06, 0x6D, 0x6D, 0x02, 0x38, 0xC8, 0x38, 0xCE, 0xE1, 0xF4, 0x68, 0x80, 0x22, 0x17, 0xEF, 0xEE,
    0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80, 0xFF, 0x0A, 0xF3, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xFE,
    0x61, 0x6D, 0x80, 0x20, 0x42, 0xF5, 0xF0, 0xE5, 0xF2, 0xE9, 0xEF, 0x72, 0x80, 0xF6, 0xE9, 0xF9,
    0xED, 0xF0, 0xF4, 0xEF, 0xF4, 0xE9, 0xE3, 0xE1, 0xEC, 0xEC, 0xF9, 0xE5, 0xF1, 0xF5, 0xE1, 0x6C,
    0x80, 0x22, 0x43, 0x74, 0x84, 0x00, 0x40, 0x39, 0x0F, 0x39, 0x16, 0x39, 0x22, 0x39, 0x2A, 0xE9,
    0xEC, 0xE4, 0x65, 0x80, 0x00, 0xE3, 0xED, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80,
    0xFF, 0x20, 0xF3, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xFE, 0x6B, 0xF5, 0xF2, 0xEE, 0xE5, 0x64, 0x80,
    0x02, 0x50, 0x75, 0x06, 0x39, 0x40, 0x39, 0x59, 0x39, 0x60, 0x39, 0x79, 0x39, 0x8D, 0x39, 0x9D,
    0x62, 0x02, 0x39, 0x46, 0x39, 0x4F, 0xE5, 0xEE, 0xE7, 0xE1, 0xEC, 0x69, 0x80, 0x09, 0x94, 0xEF,
    0xF0, 0xEF, 0xED, 0xEF, 0xE6, 0x6F, 0x80, 0x31, 0x20, 0xE4, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x14,
    0xE7, 0x75, 0x02, 0x39, 0x67, 0x39, 0x70, 0xEA, 0xE1, 0xF2, 0xE1, 0xF4, 0x69, 0x80, 0x0A, 0x94,
    0xF2, 0xED, 0xF5, 0xEB, 0xE8, 0x69, 0x80, 0x0A, 0x14, 0xEC, 0xE5, 0xEE, 0xE7, 0xF4, 0xE8, 0xED,
    0xE1, 0xF2, 0xEB, 0xE2, 0xE5, 0xEE, 0xE7, 0xE1, 0xEC, 0x69, 0x80, 0x09, 0xD7, 0xED, 0xE1, 0xF4,
    0xF2, 0xE1, 0xE7, 0xF5, 0xF2, 0xED, 0xF5, 0xEB, 0xE8, 0x69, 0x80, 0x0A, 0x4C, 0xF6, 0xEF, 0xF7,
    0xE5, 0xEC, 0xF3, 0xE9, 0xE7, 0x6E, 0x03, 0x39, 0xAD, 0x39, 0xB7, 0x39, 0xBE, 0xE2, 0xE5, 0xEE,
    0xE7, 0xE1, 0xEC, 0x69, 0x80, 0x09, 0xCC, 0xE4, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x4C, 0xE7, 0xF5,
    0xEA, 0xE1, 0xF2, 0xE1, 0xF4, 0x69, 0x80, 0x0A, 0xCC, 0xF6, 0xE1, 0xE7, 0xF2, 0xE1, 0xE8, 0xE1,
    0xE4, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x3D, 0x79, 0x02, 0x39, 0xDD, 0x39, 0xE9, 0xE2, 0xE1, 0xF2,
    0xED, 0xE5, 0xEE, 0xE9, 0xE1, 0x6E, 0x80, 0x05, 0x61, 0xE9, 0x6E, 0x82, 0x05, 0xE2, 0x39, 0xF2,
    0x3A, 0x01, 0xE1, 0xEC, 0xF4, 0xEF, 0xEE, 0xE5, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0xFB,
    0x20, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xE2, 0x62, 0x90, 0x00, 0x62, 0x3A, 0x2E,
    0x3A, 0xB5, 0x3A, 0xC0, 0x3A, 0xC9, 0x3A, 0xE2, 0x3C, 0x0B, 0x3C, 0x49, 0x3C, 0x92, 0x3E, 0x3E,
    0x3E, 0x4A, 0x3E, 0x75, 0x3E, 0x7D, 0x3E, 0x87, 0x40, 0x05, 0x40, 0x1D, 0x40, 0x26, 0x61, 0x07,
    0x3A, 0x3E, 0x3A, 0x48, 0x3A, 0x60, 0x3A, 0x67, 0x3A, 0x80, 0x3A, 0x98, 0x3A, 0xA3, 0xE2, 0xE5,
    0xEE, 0xE7, 0xE1, 0xEC, 0x69, 0x80, 0x09, 0xAC, 0xE3, 0xEB, 0xF3, 0xEC, 0xE1, 0xF3, 0x68, 0x81,
    0x00, 0x5C, 0x3A, 0x54, 0xED, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80, 0xFF, 0x3C,
    0xE4, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x2C, 0xE7, 0x75, 0x02, 0x3A, 0x6E, 0x3A, 0x77, 0xEA, 0xE1,
    0xF2, 0xE1, 0xF4, 0x69, 0x80, 0x0A, 0xAC, 0xF2, 0xED, 0xF5, 0xEB, 0xE8, 0x69, 0x80, 0x0A, 0x2C,
    0x68, 0x02, 0x3A, 0x86, 0x3A, 0x90, 0xE9, 0xF2, 0xE1, 0xE7, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0x70,
    0xF4, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x3F, 0xEB, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1, 0xEE, 0x61,
    0x80, 0x30, 0xD0, 0x72, 0x81, 0x00, 0x7C, 0x3A, 0xA9, 0xED, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1,
    0xE3, 0x65, 0x80, 0xFF, 0x5C, 0xE2, 0xEF, 0xF0, 0xEF, 0xED, 0xEF, 0xE6, 0x6F, 0x80, 0x31, 0x05,
    0xE3, 0xE9, 0xF2, 0xE3, 0xEC, 0x65, 0x80, 0x24, 0xD1, 0xE4, 0xEF, 0x74, 0x02, 0x3A, 0xD1, 0x3A,
    0xDA, 0xE1, 0xE3, 0xE3, 0xE5, 0xEE, 0x74, 0x80, 0x1E, 0x03, 0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80,
    0x1E, 0x05, 0x65, 0x06, 0x3A, 0xF0, 0x3B, 0x05, 0x3B, 0x1C, 0x3B, 0xAA, 0x3B, 0xB5, 0x3B, 0xC1,
    0xE1, 0xED, 0xE5, 0xE4, 0xF3, 0xE9, 0xF8, 0xF4, 0xE5, 0xE5, 0xEE, 0xF4, 0xE8, 0xEE, 0xEF, 0xF4,
    0xE5, 0x73, 0x80, 0x26, 0x6C, 0x63, 0x02, 0x3B, 0x0B, 0x3B, 0x12, 0xE1, 0xF5, 0xF3, 0x65, 0x80,
    0x22, 0x35, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x31, 0x68, 0x05, 0x3B, 0x28,
    0x3B, 0x31, 0x3B, 0x3F, 0x3B, 0x5D, 0x3B, 0x98, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0x06,
    0x28, 0xE6, 0xE9, 0xEE, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE, 0x90, 0x69,
    0x02, 0x3B, 0x45, 0x3B, 0x54, 0xEE, 0xE9, 0xF4, 0xE9, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9,
    0x63, 0x80, 0xFE, 0x91, 0xF2, 0xE1, 0xE7, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0x79, 0xED, 0x65, 0x02,
    0x3B, 0x64, 0x3B, 0x71, 0xE4, 0xE9, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE,
    0x92, 0xE5, 0xED, 0x69, 0x02, 0x3B, 0x79, 0x3B, 0x88, 0xEE, 0xE9, 0xF4, 0xE9, 0xE1, 0xEC, 0xE1,
    0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFC, 0x9F, 0xF3, 0xEF, 0xEC, 0xE1, 0xF4, 0xE5, 0xE4, 0xE1,
    0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFC, 0x08, 0xEE, 0xEF, 0xEF, 0xEE, 0xE6, 0xE9, 0xEE, 0xE1,
    0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFC, 0x6D, 0xEB, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1,
    0xEE, 0x61, 0x80, 0x30, 0xD9, 0xEE, 0xE1, 0xF2, 0xED, 0xE5, 0xEE, 0xE9, 0xE1, 0x6E, 0x80, 0x05,
    0x62, 0x74, 0x84, 0x05, 0xD1, 0x3B, 0xCD, 0x3B, 0xE1, 0x3B, 0xF5, 0x3B, 0xFE, 0x61, 0x81, 0x03,
    0xB2, 0x3B, 0xD3, 0xF3, 0xF9, 0xED, 0xE2, 0xEF, 0xEC, 0xE7, 0xF2, 0xE5, 0xE5, 0x6B, 0x80, 0x03,
    0xD0, 0xE4, 0xE1, 0xE7, 0xE5, 0xF3, 0x68, 0x81, 0xFB, 0x31, 0x3B, 0xEC, 0xE8, 0xE5, 0xE2, 0xF2,
    0xE5, 0x77, 0x80, 0xFB, 0x31, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xD1, 0xF2, 0xE1,
    0xE6, 0xE5, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0xFB, 0x4C, 0x68, 0x02, 0x3C, 0x11, 0x3C,
    0x43, 0x61, 0x03, 0x3C, 0x19, 0x3C, 0x23, 0x3C, 0x2A, 0xE2, 0xE5, 0xEE, 0xE7, 0xE1, 0xEC, 0x69,
    0x80, 0x09, 0xAD, 0xE4, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x2D, 0xE7, 0x75, 0x02, 0x3C, 0x31, 0x3C,
    0x3A, 0xEA, 0xE1, 0xF2, 0xE1, 0xF4, 0x69, 0x80, 0x0A, 0xAD, 0xF2, 0xED, 0xF5, 0xEB, 0xE8, 0x69,
    0x80, 0x0A, 0x2D, 0xEF, 0xEF, 0x6B, 0x80, 0x02, 0x53, 0x69, 0x05, 0x3C, 0x55, 0x3C, 0x60, 0x3C,
    0x6B, 0x3C, 0x79, 0x3C, 0x87, 0xE8, 0xE9, 0xF2, 0xE1, 0xE7, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0x73,
    0xEB, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0xD3, 0xEC, 0xE1, 0xE2, 0xE9, 0xE1,
    0xEC, 0xE3, 0xEC, 0xE9, 0xE3, 0x6B, 0x80, 0x02, 0x98, 0xEE, 0xE4, 0xE9, 0xE7, 0xF5, 0xF2, 0xED,
    0xF5, 0xEB, 0xE8, 0x69, 0x80, 0x0A, 0x02, 0xF2, 0xF5, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80,
    0x33, 0x31, 0x6C, 0x03, 0x3C, 0x9A, 0x3E, 0x2D, 0x3E, 0x38, 0xE1, 0xE3, 0x6B, 0x06, 0x3C, 0xAA,
    0x3C, 0xB3, 0x3C, 0xD8, 0x3D, 0x6D, 0x3D, 0xA4, 0x3D, 0xD8, 0xE3, 0xE9, 0xF2, 0xE3, 0xEC, 0x65,
    0x80, 0x25, 0xCF, 0x64, 0x02, 0x3C, 0xB9, 0x3C, 0xC2, 0xE9, 0xE1, 0xED, 0xEF, 0xEE, 0x64, 0x80,
    0x25, 0xC6, 0xEF, 0xF7, 0xEE, 0xF0, 0xEF, 0xE9, 0xEE, 0xF4, 0xE9, 0xEE, 0xE7, 0xF4, 0xF2, 0xE9,
    0xE1, 0xEE, 0xE7, 0xEC, 0x65, 0x80, 0x25, 0xBC, 0x6C, 0x02, 0x3C, 0xDE, 0x3D, 0x45, 0x65, 0x02,
    0x3C, 0xE4, 0x3D, 0x08, 0xE6, 0xF4, 0xF0, 0xEF, 0xE9, 0xEE, 0xF4, 0xE9, 0xEE, 0x67, 0x02, 0x3C,
    0xF3, 0x3C, 0xFD, 0xF0, 0xEF, 0xE9, 0xEE, 0xF4, 0xE5, 0x72, 0x80, 0x25, 0xC4, 0xF4, 0xF2, 0xE9,
    0xE1, 0xEE, 0xE7, 0xEC, 0x65, 0x80, 0x25, 0xC0, 0xEE, 0xF4, 0xE9, 0xE3, 0xF5, 0xEC, 0xE1, 0xF2,
    0xE2, 0xF2, 0xE1, 0xE3, 0xEB, 0xE5, 0x74, 0x02, 0x3D, 0x1C, 0x3D, 0x30, 0xEC, 0xE5, 0xE6, 0x74,
    0x81, 0x30, 0x10, 0x3D, 0x25, 0xF6, 0xE5, 0xF2, 0xF4, 0xE9, 0xE3, 0xE1, 0x6C, 0x80, 0xFE, 0x3B,
    0xF2, 0xE9, 0xE7, 0xE8, 0x74, 0x81, 0x30, 0x11, 0x3D, 0x3A, 0xF6, 0xE5, 0xF2, 0xF4, 0xE9, 0xE3,
    0xE1, 0x6C, 0x80, 0xFE, 0x3C, 0xEF, 0xF7, 0xE5, 0x72, 0x02, 0x3D, 0x4E, 0x3D, 0x5D, 0xEC, 0xE5,
    0xE6, 0xF4, 0xF4, 0xF2, 0xE9, 0xE1, 0xEE, 0xE7, 0xEC, 0x65, 0x80, 0x25, 0xE3, 0xF2, 0xE9, 0xE7,
    0xE8, 0xF4, 0xF4, 0xF2, 0xE9, 0xE1, 0xEE, 0xE7, 0xEC, 0x65, 0x80, 0x25, 0xE2, 0x72, 0x02, 0x3D,
    0x73, 0x3D, 0x7E, 0xE5, 0xE3, 0xF4, 0xE1, 0xEE, 0xE7, 0xEC, 0x65, 0x80, 0x25, 0xAC, 0xE9, 0xE7,
    0xE8, 0xF4, 0xF0, 0xEF, 0xE9, 0xEE, 0xF4, 0xE9, 0xEE, 0x67, 0x02, 0x3D, 0x8F, 0x3D, 0x99, 0xF0,
    0xEF, 0xE9, 0xEE, 0xF4, 0xE5, 0x72, 0x80, 0x25, 0xBA, 0xF4, 0xF2, 0xE9, 0xE1, 0xEE, 0xE7, 0xEC,
    0x65, 0x80, 0x25, 0xB6, 0x73, 0x03, 0x3D, 0xAC, 0x3D, 0xCA, 0x3D, 0xD2, 0x6D, 0x02, 0x3D, 0xB2,
    0x3D, 0xBE, 0xE1, 0xEC, 0xEC, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x25, 0xAA, 0xE9, 0xEC,
    0xE9, 0xEE, 0xE7, 0xE6, 0xE1, 0xE3, 0x65, 0x80, 0x26, 0x3B, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80,
    0x25, 0xA0, 0xF4, 0xE1, 0x72, 0x80, 0x26, 0x05, 0xF5, 0xF0, 0x70, 0x02, 0x3D, 0xE0, 0x3E, 0x06,
    0xE5, 0x72, 0x02, 0x3D, 0xE7, 0x3D, 0xF6, 0xEC, 0xE5, 0xE6, 0xF4, 0xF4, 0xF2, 0xE9, 0xE1, 0xEE,
    0xE7, 0xEC, 0x65, 0x80, 0x25, 0xE4, 0xF2, 0xE9, 0xE7, 0xE8, 0xF4, 0xF4, 0xF2, 0xE9, 0xE1, 0xEE,
    0xE7, 0xEC, 0x65, 0x80, 0x25, 0xE5, 0xEF, 0xE9, 0xEE, 0xF4, 0xE9, 0xEE, 0x67, 0x02, 0x3E, 0x12,
    0x3E, 0x22, 0xF3, 0xED, 0xE1, 0xEC, 0xEC, 0xF4, 0xF2, 0xE9, 0xE1, 0xEE, 0xE7, 0xEC, 0x65, 0x80,
    0x25, 0xB4, 0xF4, 0xF2, 0xE9, 0xE1, 0xEE, 0xE7, 0xEC, 0x65, 0x80, 0x25, 0xB2, 0xE9, 0xEE, 0xE5,
    0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E, 0x07, 0xEF, 0xE3, 0x6B, 0x80, 0x25, 0x88, 0xED, 0xEF,
    0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80, 0xFF, 0x42, 0x6F, 0x03, 0x3E, 0x52, 0x3E, 0x5F,
    0x3E, 0x6A, 0xE2, 0xE1, 0xE9, 0xED, 0xE1, 0xE9, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x1A, 0xE8,
    0xE9, 0xF2, 0xE1, 0xE7, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0x7C, 0xEB, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1,
    0xEE, 0x61, 0x80, 0x30, 0xDC, 0xF0, 0xE1, 0xF2, 0xE5, 0x6E, 0x80, 0x24, 0x9D, 0xF1, 0xF3, 0xF1,
    0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0xC3, 0x72, 0x04, 0x3E, 0x91, 0x3F, 0x8B, 0x3F, 0xD4, 0x3F,
    0xFB, 0xE1, 0x63, 0x02, 0x3E, 0x98, 0x3F, 0x2E, 0x65, 0x03, 0x3E, 0xA0, 0x3E, 0xA5, 0x3E, 0xE9,
    0xE5, 0x78, 0x80, 0xF8, 0xF4, 0xEC, 0xE5, 0xE6, 0x74, 0x85, 0x00, 0x7B, 0x3E, 0xB6, 0x3E, 0xBB,
    0x3E, 0xD1, 0x3E, 0xD9, 0x3E, 0xDE, 0xE2, 0x74, 0x80, 0xF8, 0xF3, 0x6D, 0x02, 0x3E, 0xC1, 0x3E,
    0xC6, 0xE9, 0x64, 0x80, 0xF8, 0xF2, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80, 0xFF,
    0x5B, 0xF3, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xFE, 0x5B, 0xF4, 0x70, 0x80, 0xF8, 0xF1, 0xF6, 0xE5,
    0xF2, 0xF4, 0xE9, 0xE3, 0xE1, 0x6C, 0x80, 0xFE, 0x37, 0xF2, 0xE9, 0xE7, 0xE8, 0x74, 0x85, 0x00,
    0x7D, 0x3E, 0xFB, 0x3F, 0x00, 0x3F, 0x16, 0x3F, 0x1E, 0x3F, 0x23, 0xE2, 0x74, 0x80, 0xF8, 0xFE,
    0x6D, 0x02, 0x3F, 0x06, 0x3F, 0x0B, 0xE9, 0x64, 0x80, 0xF8, 0xFD, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0,
    0xE1, 0xE3, 0x65, 0x80, 0xFF, 0x5D, 0xF3, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xFE, 0x5C, 0xF4, 0x70,
    0x80, 0xF8, 0xFC, 0xF6, 0xE5, 0xF2, 0xF4, 0xE9, 0xE3, 0xE1, 0x6C, 0x80, 0xFE, 0x38, 0xEB, 0xE5,
    0x74, 0x02, 0x3F, 0x36, 0x3F, 0x60, 0xEC, 0xE5, 0xE6, 0x74, 0x84, 0x00, 0x5B, 0x3F, 0x45, 0x3F,
    0x4A, 0x3F, 0x4F, 0x3F, 0x5B, 0xE2, 0x74, 0x80, 0xF8, 0xF0, 0xE5, 0x78, 0x80, 0xF8, 0xEF, 0xED,
    0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80, 0xFF, 0x3B, 0xF4, 0x70, 0x80, 0xF8, 0xEE,
    0xF2, 0xE9, 0xE7, 0xE8, 0x74, 0x84, 0x00, 0x5D, 0x3F, 0x70, 0x3F, 0x75, 0x3F, 0x7A, 0x3F, 0x86,
    0xE2, 0x74, 0x80, 0xF8, 0xFB, 0xE5, 0x78, 0x80, 0xF8, 0xFA, 0xED, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0,
    0xE1, 0xE3, 0x65, 0x80, 0xFF, 0x3D, 0xF4, 0x70, 0x80, 0xF8, 0xF9, 0xE5, 0xF6, 0x65, 0x83, 0x02,
    0xD8, 0x3F, 0x97, 0x3F, 0xA2, 0x3F, 0xA8, 0xE2, 0xE5, 0xEC, 0xEF, 0xF7, 0xE3, 0xED, 0x62, 0x80,
    0x03, 0x2E, 0xE3, 0xED, 0x62, 0x80, 0x03, 0x06, 0xE9, 0xEE, 0xF6, 0xE5, 0xF2, 0xF4, 0xE5, 0x64,
    0x03, 0x3F, 0xB7, 0x3F, 0xC2, 0x3F, 0xC8, 0xE2, 0xE5, 0xEC, 0xEF, 0xF7, 0xE3, 0xED, 0x62, 0x80,
    0x03, 0x2F, 0xE3, 0xED, 0x62, 0x80, 0x03, 0x11, 0xE4, 0xEF, 0xF5, 0xE2, 0xEC, 0xE5, 0xE3, 0xED,
    0x62, 0x80, 0x03, 0x61, 0xE9, 0xE4, 0xE7, 0x65, 0x02, 0x3F, 0xDD, 0x3F, 0xE8, 0xE2, 0xE5, 0xEC,
    0xEF, 0xF7, 0xE3, 0xED, 0x62, 0x80, 0x03, 0x2A, 0xE9, 0xEE, 0xF6, 0xE5, 0xF2, 0xF4, 0xE5, 0xE4,
    0xE2, 0xE5, 0xEC, 0xEF, 0xF7, 0xE3, 0xED, 0x62, 0x80, 0x03, 0x3A, 0xEF, 0xEB, 0xE5, 0xEE, 0xE2,
    0xE1, 0x72, 0x80, 0x00, 0xA6, 0x73, 0x02, 0x40, 0x0B, 0x40, 0x13, 0xF4, 0xF2, 0xEF, 0xEB, 0x65,
    0x80, 0x01, 0x80, 0xF5, 0xF0, 0xE5, 0xF2, 0xE9, 0xEF, 0x72, 0x80, 0xF6, 0xEA, 0xF4, 0xEF, 0xF0,
    0xE2, 0xE1, 0x72, 0x80, 0x01, 0x83, 0x75, 0x03, 0x40, 0x2E, 0x40, 0x39, 0x40, 0x44, 0xE8, 0xE9,
    0xF2, 0xE1, 0xE7, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0x76, 0xEB, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1, 0xEE,
    0x61, 0x80, 0x30, 0xD6, 0xEC, 0x6C, 0x02, 0x40, 0x4B, 0x40, 0x69, 0xE5, 0x74, 0x82, 0x20, 0x22,
    0x40, 0x54, 0x40, 0x5E, 0xE9, 0xEE, 0xF6, 0xE5, 0xF2, 0xF3, 0x65, 0x80, 0x25, 0xD8, 0xEF, 0xF0,
    0xE5, 0xF2, 0xE1, 0xF4, 0xEF, 0x72, 0x80, 0x22, 0x19, 0xF3, 0xE5, 0xF9, 0x65, 0x80, 0x25, 0xCE,
    0x63, 0x8F, 0x00, 0x63, 0x40, 0x92, 0x41, 0x5F, 0x41, 0x6A, 0x41, 0xAA, 0x41, 0xC9, 0x42, 0x26,
    0x43, 0xCD, 0x44, 0xBD, 0x45, 0x21, 0x45, 0x52, 0x48, 0x4A, 0x48, 0x52, 0x48, 0x5C, 0x48, 0x68,
    0x48, 0x89, 0x61, 0x09, 0x40, 0xA6, 0x40, 0xB1, 0x40, 0xBB, 0x40, 0xC2, 0x40, 0xC9, 0x40, 0xE2,
    0x40, 0xEC, 0x41, 0x20, 0x41, 0x29, 0xE1, 0xF2, 0xED, 0xE5, 0xEE, 0xE9, 0xE1, 0x6E, 0x80, 0x05,
    0x6E, 0xE2, 0xE5, 0xEE, 0xE7, 0xE1, 0xEC, 0x69, 0x80, 0x09, 0x9A, 0xE3, 0xF5, 0xF4, 0x65, 0x80,
    0x01, 0x07, 0xE4, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x1A, 0xE7, 0x75, 0x02, 0x40, 0xD0, 0x40, 0xD9,
    0xEA, 0xE1, 0xF2, 0xE1, 0xF4, 0x69, 0x80, 0x0A, 0x9A, 0xF2, 0xED, 0xF5, 0xEB, 0xE8, 0x69, 0x80,
    0x0A, 0x1A, 0xEC, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0x88, 0xEE, 0xE4, 0xF2, 0xE1,
    0xE2, 0xE9, 0xEE, 0xE4, 0x75, 0x04, 0x40, 0xFE, 0x41, 0x08, 0x41, 0x0E, 0x41, 0x15, 0xE2, 0xE5,
    0xEE, 0xE7, 0xE1, 0xEC, 0x69, 0x80, 0x09, 0x81, 0xE3, 0xED, 0x62, 0x80, 0x03, 0x10, 0xE4, 0xE5,
    0xF6, 0x61, 0x80, 0x09, 0x01, 0xE7, 0xF5, 0xEA, 0xE1, 0xF2, 0xE1, 0xF4, 0x69, 0x80, 0x0A, 0x81,
    0xF0, 0xF3, 0xEC, 0xEF, 0xE3, 0x6B, 0x80, 0x21, 0xEA, 0x72, 0x03, 0x41, 0x31, 0x41, 0x37, 0x41,
    0x51, 0xE5, 0xEF, 0x66, 0x80, 0x21, 0x05, 0xEF, 0x6E, 0x82, 0x02, 0xC7, 0x41, 0x40, 0x41, 0x4B,
    0xE2, 0xE5, 0xEC, 0xEF, 0xF7, 0xE3, 0xED, 0x62, 0x80, 0x03, 0x2C, 0xE3, 0xED, 0x62, 0x80, 0x03,
    0x0C, 0xF2, 0xE9, 0xE1, 0xE7, 0xE5, 0xF2, 0xE5, 0xF4, 0xF5, 0xF2, 0x6E, 0x80, 0x21, 0xB5, 0xE2,
    0xEF, 0xF0, 0xEF, 0xED, 0xEF, 0xE6, 0x6F, 0x80, 0x31, 0x18, 0x63, 0x04, 0x41, 0x74, 0x41, 0x7B,
    0x41, 0x8E, 0x41, 0xA4, 0xE1, 0xF2, 0xEF, 0x6E, 0x80, 0x01, 0x0D, 0xE5, 0xE4, 0xE9, 0xEC, 0xEC,
    0x61, 0x81, 0x00, 0xE7, 0x41, 0x86, 0xE1, 0xE3, 0xF5, 0xF4, 0x65, 0x80, 0x1E, 0x09, 0xE9, 0xF2,
    0x63, 0x02, 0x41, 0x96, 0x41, 0x9B, 0xEC, 0x65, 0x80, 0x24, 0xD2, 0xF5, 0xED, 0xE6, 0xEC, 0xE5,
    0x78, 0x80, 0x01, 0x09, 0xF5, 0xF2, 0x6C, 0x80, 0x02, 0x55, 0x64, 0x02, 0x41, 0xB0, 0x41, 0xC0,
    0xEF, 0x74, 0x81, 0x01, 0x0B, 0x41, 0xB7, 0xE1, 0xE3, 0xE3, 0xE5, 0xEE, 0x74, 0x80, 0x01, 0x0B,
    0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0xC5, 0x65, 0x02, 0x41, 0xCF, 0x41, 0xDF, 0xE4,
    0xE9, 0xEC, 0xEC, 0x61, 0x81, 0x00, 0xB8, 0x41, 0xD9, 0xE3, 0xED, 0x62, 0x80, 0x03, 0x27, 0xEE,
    0x74, 0x84, 0x00, 0xA2, 0x41, 0xEC, 0x42, 0x04, 0x42, 0x10, 0x42, 0x1B, 0x69, 0x02, 0x41, 0xF2,
    0x41, 0xFA, 0xE7, 0xF2, 0xE1, 0xE4, 0x65, 0x80, 0x21, 0x03, 0xEE, 0xE6, 0xE5, 0xF2, 0xE9, 0xEF,
    0x72, 0x80, 0xF6, 0xDF, 0xED, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80, 0xFF, 0xE0,
    0xEF, 0xEC, 0xE4, 0xF3, 0xF4, 0xF9, 0xEC, 0x65, 0x80, 0xF7, 0xA2, 0xF3, 0xF5, 0xF0, 0xE5, 0xF2,
    0xE9, 0xEF, 0x72, 0x80, 0xF6, 0xE0, 0x68, 0x05, 0x42, 0x32, 0x42, 0x71, 0x42, 0x7C, 0x43, 0x34,
    0x43, 0x90, 0x61, 0x04, 0x42, 0x3C, 0x42, 0x47, 0x42, 0x51, 0x42, 0x58, 0xE1, 0xF2, 0xED, 0xE5,
    0xEE, 0xE9, 0xE1, 0x6E, 0x80, 0x05, 0x79, 0xE2, 0xE5, 0xEE, 0xE7, 0xE1, 0xEC, 0x69, 0x80, 0x09,
    0x9B, 0xE4, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x1B, 0xE7, 0x75, 0x02, 0x42, 0x5F, 0x42, 0x68, 0xEA,
    0xE1, 0xF2, 0xE1, 0xF4, 0x69, 0x80, 0x0A, 0x9B, 0xF2, 0xED, 0xF5, 0xEB, 0xE8, 0x69, 0x80, 0x0A,
    0x1B, 0xE2, 0xEF, 0xF0, 0xEF, 0xED, 0xEF, 0xE6, 0x6F, 0x80, 0x31, 0x14, 0x65, 0x06, 0x42, 0x8A,
    0x42, 0x9E, 0x42, 0xB6, 0x42, 0xFA, 0x43, 0x06, 0x43, 0x1B, 0xE1, 0xE2, 0xEB, 0xE8, 0xE1, 0xF3,
    0xE9, 0xE1, 0xEE, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0xBD, 0x63, 0x02,
    0x42, 0xA4, 0x42, 0xAC, 0xEB, 0xED, 0xE1, 0xF2, 0x6B, 0x80, 0x27, 0x13, 0xF9, 0xF2, 0xE9, 0xEC,
    0xEC, 0xE9, 0x63, 0x80, 0x04, 0x47, 0x64, 0x02, 0x42, 0xBC, 0x42, 0xE8, 0xE5, 0xF3, 0xE3, 0xE5,
    0xEE, 0xE4, 0xE5, 0x72, 0x02, 0x42, 0xC9, 0x42, 0xDD, 0xE1, 0xE2, 0xEB, 0xE8, 0xE1, 0xF3, 0xE9,
    0xE1, 0xEE, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0xBF, 0xE3, 0xF9, 0xF2,
    0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0xB7, 0xE9, 0xE5, 0xF2, 0xE5, 0xF3, 0xE9, 0xF3, 0xE3,
    0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0xF5, 0xE8, 0xE1, 0xF2, 0xED, 0xE5, 0xEE,
    0xE9, 0xE1, 0x6E, 0x80, 0x05, 0x73, 0xEB, 0xE8, 0xE1, 0xEB, 0xE1, 0xF3, 0xF3, 0xE9, 0xE1, 0xEE,
    0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0xCC, 0xF6, 0xE5, 0xF2, 0xF4, 0xE9,
    0xE3, 0xE1, 0xEC, 0xF3, 0xF4, 0xF2, 0xEF, 0xEB, 0xE5, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9,
    0x63, 0x80, 0x04, 0xB9, 0x69, 0x81, 0x03, 0xC7, 0x43, 0x3A, 0xE5, 0xF5, 0xE3, 0x68, 0x04, 0x43,
    0x47, 0x43, 0x6A, 0x43, 0x79, 0x43, 0x82, 0x61, 0x02, 0x43, 0x4D, 0x43, 0x5C, 0xE3, 0xE9, 0xF2,
    0xE3, 0xEC, 0xE5, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x32, 0x77, 0xF0, 0xE1, 0xF2, 0xE5,
    0xEE, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x32, 0x17, 0xE3, 0xE9, 0xF2, 0xE3, 0xEC, 0xE5,
    0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x32, 0x69, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80,
    0x31, 0x4A, 0xF0, 0xE1, 0xF2, 0xE5, 0xEE, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x32, 0x09,
    0x6F, 0x02, 0x43, 0x96, 0x43, 0xC8, 0xE3, 0x68, 0x03, 0x43, 0x9F, 0x43, 0xB5, 0x43, 0xBF, 0xE1,
    0x6E, 0x02, 0x43, 0xA6, 0x43, 0xAE, 0xE7, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x0A, 0xF4, 0xE8,
    0xE1, 0x69, 0x80, 0x0E, 0x08, 0xE9, 0xEE, 0xE7, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x09, 0xEF,
    0xE5, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x0C, 0xEF, 0x6B, 0x80, 0x01, 0x88, 0x69, 0x02, 0x43,
    0xD3, 0x44, 0x39, 0xE5, 0xF5, 0x63, 0x05, 0x43, 0xE1, 0x44, 0x04, 0x44, 0x13, 0x44, 0x1C, 0x44,
    0x2A, 0x61, 0x02, 0x43, 0xE7, 0x43, 0xF6, 0xE3, 0xE9, 0xF2, 0xE3, 0xEC, 0xE5, 0xEB, 0xEF, 0xF2,
    0xE5, 0xE1, 0x6E, 0x80, 0x32, 0x76, 0xF0, 0xE1, 0xF2, 0xE5, 0xEE, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1,
    0x6E, 0x80, 0x32, 0x16, 0xE3, 0xE9, 0xF2, 0xE3, 0xEC, 0xE5, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E,
    0x80, 0x32, 0x68, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31, 0x48, 0xF0, 0xE1, 0xF2, 0xE5,
    0xEE, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x32, 0x08, 0xF5, 0xF0, 0xE1, 0xF2, 0xE5, 0xEE,
    0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x32, 0x1C, 0xF2, 0x63, 0x02, 0x44, 0x40, 0x44, 0x9F,
    0xEC, 0x65, 0x84, 0x25, 0xCB, 0x44, 0x4D, 0x44, 0x58, 0x44, 0x5D, 0x44, 0x75, 0xED, 0xF5, 0xEC,
    0xF4, 0xE9, 0xF0, 0xEC, 0x79, 0x80, 0x22, 0x97, 0xEF, 0x74, 0x80, 0x22, 0x99, 0x70, 0x02, 0x44,
    0x63, 0x44, 0x69, 0xEC, 0xF5, 0x73, 0x80, 0x22, 0x95, 0xEF, 0xF3, 0xF4, 0xE1, 0xEC, 0xED, 0xE1,
    0xF2, 0x6B, 0x80, 0x30, 0x36, 0xF7, 0xE9, 0xF4, 0x68, 0x02, 0x44, 0x7E, 0x44, 0x8E, 0xEC, 0xE5,
    0xE6, 0xF4, 0xE8, 0xE1, 0xEC, 0xE6, 0xE2, 0xEC, 0xE1, 0xE3, 0x6B, 0x80, 0x25, 0xD0, 0xF2, 0xE9,
    0xE7, 0xE8, 0xF4, 0xE8, 0xE1, 0xEC, 0xE6, 0xE2, 0xEC, 0xE1, 0xE3, 0x6B, 0x80, 0x25, 0xD1, 0xF5,
    0xED, 0xE6, 0xEC, 0xE5, 0x78, 0x82, 0x02, 0xC6, 0x44, 0xAC, 0x44, 0xB7, 0xE2, 0xE5, 0xEC, 0xEF,
    0xF7, 0xE3, 0xED, 0x62, 0x80, 0x03, 0x2D, 0xE3, 0xED, 0x62, 0x80, 0x03, 0x02, 0x6C, 0x03, 0x44,
    0xC5, 0x44, 0xCB, 0x45, 0x01, 0xE5, 0xE1, 0x72, 0x80, 0x23, 0x27, 0xE9, 0xE3, 0x6B, 0x04, 0x44,
    0xD7, 0x44, 0xE2, 0x44, 0xEB, 0x44, 0xF5, 0xE1, 0xEC, 0xF6, 0xE5, 0xEF, 0xEC, 0xE1, 0x72, 0x80,
    0x01, 0xC2, 0xE4, 0xE5, 0xEE, 0xF4, 0xE1, 0x6C, 0x80, 0x01, 0xC0, 0xEC, 0xE1, 0xF4, 0xE5, 0xF2,
    0xE1, 0x6C, 0x80, 0x01, 0xC1, 0xF2, 0xE5, 0xF4, 0xF2, 0xEF, 0xE6, 0xEC, 0xE5, 0x78, 0x80, 0x01,
    0xC3, 0xF5, 0x62, 0x81, 0x26, 0x63, 0x45, 0x08, 0xF3, 0xF5, 0xE9, 0x74, 0x02, 0x45, 0x11, 0x45,
    0x19, 0xE2, 0xEC, 0xE1, 0xE3, 0x6B, 0x80, 0x26, 0x63, 0xF7, 0xE8, 0xE9, 0xF4, 0x65, 0x80, 0x26,
    0x67, 0x6D, 0x03, 0x45, 0x29, 0x45, 0x37, 0x45, 0x42, 0xE3, 0xF5, 0xE2, 0xE5, 0xE4, 0xF3, 0xF1,
    0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0xA4, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80,
    0xFF, 0x43, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0xE5, 0xE4, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80,
    0x33, 0xA0, 0x6F, 0x08, 0x45, 0x64, 0x45, 0x6F, 0x45, 0xC6, 0x46, 0x8C, 0x47, 0xA9, 0x47, 0xC8,
    0x48, 0x33, 0x48, 0x3C, 0xE1, 0xF2, 0xED, 0xE5, 0xEE, 0xE9, 0xE1, 0x6E, 0x80, 0x05, 0x81, 0xEC,
    0xEF, 0x6E, 0x83, 0x00, 0x3A, 0x45, 0x7B, 0x45, 0x94, 0x45, 0xA7, 0xED, 0xEF, 0x6E, 0x02, 0x45,
    0x83, 0x45, 0x8B, 0xE5, 0xF4, 0xE1, 0xF2, 0x79, 0x80, 0x20, 0xA1, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3,
    0x65, 0x80, 0xFF, 0x1A, 0x73, 0x02, 0x45, 0x9A, 0x45, 0xA0, 0xE9, 0xE7, 0x6E, 0x80, 0x20, 0xA1,
    0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xFE, 0x55, 0xF4, 0xF2, 0xE9, 0xE1, 0xEE, 0xE7, 0xF5, 0xEC, 0xE1,
    0x72, 0x02, 0x45, 0xB6, 0x45, 0xC0, 0xE8, 0xE1, 0xEC, 0xE6, 0xED, 0xEF, 0x64, 0x80, 0x02, 0xD1,
    0xED, 0xEF, 0x64, 0x80, 0x02, 0xD0, 0x6D, 0x02, 0x45, 0xCC, 0x46, 0x85, 0xED, 0x61, 0x86, 0x00,
    0x2C, 0x45, 0xDD, 0x46, 0x1D, 0x46, 0x28, 0x46, 0x34, 0x46, 0x52, 0x46, 0x69, 0x61, 0x03, 0x45,
    0xE5, 0x45, 0xFF, 0x46, 0x07, 0xE2, 0xEF, 0xF6, 0x65, 0x02, 0x45, 0xEE, 0x45, 0xF4, 0xE3, 0xED,
    0x62, 0x80, 0x03, 0x13, 0xF2, 0xE9, 0xE7, 0xE8, 0xF4, 0xE3, 0xED, 0x62, 0x80, 0x03, 0x15, 0xE3,
    0xE3, 0xE5, 0xEE, 0x74, 0x80, 0xF6, 0xC3, 0x72, 0x02, 0x46, 0x0D, 0x46, 0x14, 0xE1, 0xE2, 0xE9,
    0x63, 0x80, 0x06, 0x0C, 0xED, 0xE5, 0xEE, 0xE9, 0xE1, 0x6E, 0x80, 0x05, 0x5D, 0xE9, 0xEE, 0xE6,
    0xE5, 0xF2, 0xE9, 0xEF, 0x72, 0x80, 0xF6, 0xE1, 0xED, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3,
    0x65, 0x80, 0xFF, 0x0C, 0xF2, 0xE5, 0xF6, 0xE5, 0xF2, 0xF3, 0xE5, 0x64, 0x02, 0x46, 0x41, 0x46,
    0x4C, 0xE1, 0xE2, 0xEF, 0xF6, 0xE5, 0xE3, 0xED, 0x62, 0x80, 0x03, 0x14, 0xED, 0xEF, 0x64, 0x80,
    0x02, 0xBD, 0x73, 0x02, 0x46, 0x58, 0x46, 0x5F, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xFE, 0x50, 0xF5,
    0xF0, 0xE5, 0xF2, 0xE9, 0xEF, 0x72, 0x80, 0xF6, 0xE2, 0xF4, 0xF5, 0xF2, 0xEE, 0xE5, 0x64, 0x02,
    0x46, 0x74, 0x46, 0x7F, 0xE1, 0xE2, 0xEF, 0xF6, 0xE5, 0xE3, 0xED, 0x62, 0x80, 0x03, 0x12, 0xED,
    0xEF, 0x64, 0x80, 0x02, 0xBB, 0xF0, 0xE1, 0xF3, 0x73, 0x80, 0x26, 0x3C, 0x6E, 0x02, 0x46, 0x92,
    0x46, 0x9B, 0xE7, 0xF2, 0xF5, 0xE5, 0xEE, 0x74, 0x80, 0x22, 0x45, 0x74, 0x02, 0x46, 0xA1, 0x46,
    0xAF, 0xEF, 0xF5, 0xF2, 0xE9, 0xEE, 0xF4, 0xE5, 0xE7, 0xF2, 0xE1, 0x6C, 0x80, 0x22, 0x2E, 0xF2,
    0xEF, 0x6C, 0x8E, 0x23, 0x03, 0x46, 0xD1, 0x46, 0xD7, 0x46, 0xE6, 0x46, 0xF5, 0x47, 0x21, 0x47,
    0x4E, 0x47, 0x5C, 0x47, 0x61, 0x47, 0x66, 0x47, 0x6B, 0x47, 0x71, 0x47, 0x76, 0x47, 0x9F, 0x47,
    0xA4, 0xC1, 0xC3, 0x4B, 0x80, 0x00, 0x06, 0x42, 0x02, 0x46, 0xDD, 0x46, 0xE2, 0xC5, 0x4C, 0x80,
    0x00, 0x07, 0x53, 0x80, 0x00, 0x08, 0x43, 0x02, 0x46, 0xEC, 0x46, 0xF1, 0xC1, 0x4E, 0x80, 0x00,
    0x18, 0x52, 0x80, 0x00, 0x0D, 0x44, 0x03, 0x46, 0xFD, 0x47, 0x17, 0x47, 0x1C, 0x43, 0x04, 0x47,
    0x07, 0x47, 0x0B, 0x47, 0x0F, 0x47, 0x13, 0x31, 0x80, 0x00, 0x11, 0x32, 0x80, 0x00, 0x12, 0x33,
    0x80, 0x00, 0x13, 0x34, 0x80, 0x00, 0x14, 0xC5, 0x4C, 0x80, 0x00, 0x7F, 0xCC, 0x45, 0x80, 0x00,
    0x10, 0x45, 0x05, 0x47, 0x2D, 0x47, 0x31, 0x47, 0x36, 0x47, 0x3B, 0x47, 0x40, 0x4D, 0x80, 0x00,
    0x19, 0xCE, 0x51, 0x80, 0x00, 0x05, 0xCF, 0x54, 0x80, 0x00, 0x04, 0xD3, 0x43, 0x80, 0x00, 0x1B,
    0x54, 0x02, 0x47, 0x46, 0x47, 0x4A, 0x42, 0x80, 0x00, 0x17, 0x58, 0x80, 0x00, 0x03, 0x46, 0x02,
    0x47, 0x54, 0x47, 0x58, 0x46, 0x80, 0x00, 0x0C, 0x53, 0x80, 0x00, 0x1C, 0xC7, 0x53, 0x80, 0x00,
    0x1D, 0xC8, 0x54, 0x80, 0x00, 0x09, 0xCC, 0x46, 0x80, 0x00, 0x0A, 0xCE, 0xC1, 0x4B, 0x80, 0x00,
    0x15, 0xD2, 0x53, 0x80, 0x00, 0x1E, 0x53, 0x05, 0x47, 0x82, 0x47, 0x86, 0x47, 0x90, 0x47, 0x95,
    0x47, 0x9A, 0x49, 0x80, 0x00, 0x0F, 0x4F, 0x81, 0x00, 0x0E, 0x47, 0x8C, 0x54, 0x80, 0x00, 0x01,
    0xD4, 0x58, 0x80, 0x00, 0x02, 0xD5, 0x42, 0x80, 0x00, 0x1A, 0xD9, 0x4E, 0x80, 0x00, 0x16, 0xD5,
    0x53, 0x80, 0x00, 0x1F, 0xD6, 0x54, 0x80, 0x00, 0x0B, 0xF0, 0xF9, 0xF2, 0xE9, 0xE7, 0xE8, 0x74,
    0x81, 0x00, 0xA9, 0x47, 0xB5, 0x73, 0x02, 0x47, 0xBB, 0x47, 0xC1, 0xE1, 0xEE, 0x73, 0x80, 0xF8,
    0xE9, 0xE5, 0xF2, 0xE9, 0x66, 0x80, 0xF6, 0xD9, 0x72, 0x02, 0x47, 0xCE, 0x48, 0x22, 0xEE, 0xE5,
    0xF2, 0xE2, 0xF2, 0xE1, 0xE3, 0xEB, 0xE5, 0x74, 0x02, 0x47, 0xDD, 0x47, 0xFF, 0xEC, 0xE5, 0xE6,
    0x74, 0x82, 0x30, 0x0C, 0x47, 0xE8, 0x47, 0xF4, 0xE8, 0xE1, 0xEC, 0xE6, 0xF7, 0xE9, 0xE4, 0xF4,
    0x68, 0x80, 0xFF, 0x62, 0xF6, 0xE5, 0xF2, 0xF4, 0xE9, 0xE3, 0xE1, 0x6C, 0x80, 0xFE, 0x41, 0xF2,
    0xE9, 0xE7, 0xE8, 0x74, 0x82, 0x30, 0x0D, 0x48, 0x0B, 0x48, 0x17, 0xE8, 0xE1, 0xEC, 0xE6, 0xF7,
    0xE9, 0xE4, 0xF4, 0x68, 0x80, 0xFF, 0x63, 0xF6, 0xE5, 0xF2, 0xF4, 0xE9, 0xE3, 0xE1, 0x6C, 0x80,
    0xFE, 0x42, 0xF0, 0xEF, 0xF2, 0xE1, 0xF4, 0xE9, 0xEF, 0xEE, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65,
    0x80, 0x33, 0x7F, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0xC7, 0xF6, 0xE5, 0xF2, 0xEB,
    0xE7, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0xC6, 0xF0, 0xE1, 0xF2, 0xE5, 0x6E, 0x80,
    0x24, 0x9E, 0xF2, 0xF5, 0xFA, 0xE5, 0xE9, 0xF2, 0x6F, 0x80, 0x20, 0xA2, 0xF3, 0xF4, 0xF2, 0xE5,
    0xF4, 0xE3, 0xE8, 0xE5, 0x64, 0x80, 0x02, 0x97, 0xF5, 0x72, 0x02, 0x48, 0x6F, 0x48, 0x81, 0xEC,
    0x79, 0x02, 0x48, 0x76, 0x48, 0x7C, 0xE1, 0xEE, 0x64, 0x80, 0x22, 0xCF, 0xEF, 0x72, 0x80, 0x22,
    0xCE, 0xF2, 0xE5, 0xEE, 0xE3, 0x79, 0x80, 0x00, 0xA4, 0xF9, 0x72, 0x04, 0x48, 0x94, 0x48, 0x9C,
    0x48, 0xA3, 0x48, 0xAB, 0xC2, 0xF2, 0xE5, 0xF6, 0x65, 0x80, 0xF6, 0xD1, 0xC6, 0xEC, 0xE5, 0x78,
    0x80, 0xF6, 0xD2, 0xE2, 0xF2, 0xE5, 0xF6, 0x65, 0x80, 0xF6, 0xD4, 0xE6, 0xEC, 0xE5, 0x78, 0x80,
    0xF6, 0xD5, 0x64, 0x92, 0x00, 0x64, 0x48, 0xDA, 0x4A, 0x64, 0x4B, 0x7C, 0x4B, 0xB8, 0x4C, 0x68,
    0x4D, 0x3A, 0x4D, 0x78, 0x4E, 0x31, 0x4E, 0x3E, 0x4E, 0x47, 0x4E, 0x61, 0x4E, 0x7A, 0x4E, 0x83,
    0x4F, 0xC6, 0x4F, 0xCE, 0x4F, 0xD9, 0x4F, 0xED, 0x50, 0x09, 0x61, 0x0B, 0x48, 0xF2, 0x48, 0xFD,
    0x49, 0x07, 0x49, 0x4F, 0x49, 0x8E, 0x49, 0x99, 0x49, 0xA4, 0x49, 0xE9, 0x4A, 0x27, 0x4A, 0x2D,
    0x4A, 0x4B, 0xE1, 0xF2, 0xED, 0xE5, 0xEE, 0xE9, 0xE1, 0x6E, 0x80, 0x05, 0x64, 0xE2, 0xE5, 0xEE,
    0xE7, 0xE1, 0xEC, 0x69, 0x80, 0x09, 0xA6, 0x64, 0x05, 0x49, 0x13, 0x49, 0x1C, 0x49, 0x22, 0x49,
    0x30, 0x49, 0x40, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0x06, 0x36, 0xE5, 0xF6, 0x61, 0x80,
    0x09, 0x26, 0xE6, 0xE9, 0xEE, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE, 0xBE,
    0xE9, 0xEE, 0xE9, 0xF4, 0xE9, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE, 0xBF,
    0xED, 0xE5, 0xE4, 0xE9, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE, 0xC0, 0x67,
    0x03, 0x49, 0x57, 0x49, 0x68, 0x49, 0x76, 0xE5, 0xF3, 0x68, 0x81, 0x05, 0xBC, 0x49, 0x5F, 0xE8,
    0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xBC, 0xE7, 0xE5, 0x72, 0x81, 0x20, 0x20, 0x49, 0x70,
    0xE4, 0xE2, 0x6C, 0x80, 0x20, 0x21, 0x75, 0x02, 0x49, 0x7C, 0x49, 0x85, 0xEA, 0xE1, 0xF2, 0xE1,
    0xF4, 0x69, 0x80, 0x0A, 0xA6, 0xF2, 0xED, 0xF5, 0xEB, 0xE8, 0x69, 0x80, 0x0A, 0x26, 0xE8, 0xE9,
    0xF2, 0xE1, 0xE7, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0x60, 0xEB, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1, 0xEE,
    0x61, 0x80, 0x30, 0xC0, 0x6C, 0x03, 0x49, 0xAC, 0x49, 0xB5, 0x49, 0xDB, 0xE1, 0xF2, 0xE1, 0xE2,
    0xE9, 0x63, 0x80, 0x06, 0x2F, 0xE5, 0x74, 0x82, 0x05, 0xD3, 0x49, 0xBE, 0x49, 0xD2, 0xE4, 0xE1,
    0xE7, 0xE5, 0xF3, 0x68, 0x81, 0xFB, 0x33, 0x49, 0xC9, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80,
    0xFB, 0x33, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xD3, 0xE6, 0xE9, 0xEE, 0xE1, 0xEC,
    0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE, 0xAA, 0xED, 0xED, 0x61, 0x03, 0x49, 0xF3, 0x49,
    0xFC, 0x4A, 0x08, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0x06, 0x4F, 0xEC, 0xEF, 0xF7, 0xE1,
    0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0x06, 0x4F, 0xF4, 0xE1, 0xEE, 0x61, 0x02, 0x4A, 0x11, 0x4A,
    0x1F, 0xEC, 0xF4, 0xEF, 0xEE, 0xE5, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0x06, 0x4C, 0xF2,
    0xE1, 0xE2, 0xE9, 0x63, 0x80, 0x06, 0x4C, 0xEE, 0xE4, 0x61, 0x80, 0x09, 0x64, 0xF2, 0xE7, 0x61,
    0x02, 0x4A, 0x35, 0x4A, 0x3E, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xA7, 0xEC, 0xE5,
    0xE6, 0xF4, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xA7, 0xF3, 0xE9, 0xE1, 0xF0, 0xEE,
    0xE5, 0xF5, 0xED, 0xE1, 0xF4, 0xE1, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0xE3, 0xE3, 0xED,
    0x62, 0x80, 0x04, 0x85, 0x62, 0x03, 0x4A, 0x6C, 0x4B, 0x69, 0x4B, 0x73, 0x6C, 0x09, 0x4A, 0x80,
    0x4A, 0x88, 0x4A, 0xF9, 0x4B, 0x01, 0x4B, 0x11, 0x4B, 0x1C, 0x4B, 0x2E, 0x4B, 0x3C, 0x4B, 0x47,
    0xC7, 0xF2, 0xE1, 0xF6, 0x65, 0x80, 0xF6, 0xD3, 0x61, 0x02, 0x4A, 0x8E, 0x4A, 0xC7, 0xEE, 0xE7,
    0xEC, 0xE5, 0xE2, 0xF2, 0xE1, 0xE3, 0xEB, 0xE5, 0x74, 0x02, 0x4A, 0x9E, 0x4A, 0xB2, 0xEC, 0xE5,
    0xE6, 0x74, 0x81, 0x30, 0x0A, 0x4A, 0xA7, 0xF6, 0xE5, 0xF2, 0xF4, 0xE9, 0xE3, 0xE1, 0x6C, 0x80,
    0xFE, 0x3D, 0xF2, 0xE9, 0xE7, 0xE8, 0x74, 0x81, 0x30, 0x0B, 0x4A, 0xBC, 0xF6, 0xE5, 0xF2, 0xF4,
    0xE9, 0xE3, 0xE1, 0x6C, 0x80, 0xFE, 0x3E, 0x72, 0x02, 0x4A, 0xCD, 0x4A, 0xE2, 0xE3, 0xE8, 0xE9,
    0xEE, 0xF6, 0xE5, 0xF2, 0xF4, 0xE5, 0xE4, 0xE2, 0xE5, 0xEC, 0xEF, 0xF7, 0xE3, 0xED, 0x62, 0x80,
    0x03, 0x2B, 0xF2, 0xEF, 0x77, 0x02, 0x4A, 0xEA, 0x4A, 0xF1, 0xEC, 0xE5, 0xE6, 0x74, 0x80, 0x21,
    0xD4, 0xF2, 0xE9, 0xE7, 0xE8, 0x74, 0x80, 0x21, 0xD2, 0xE4, 0xE1, 0xEE, 0xE4, 0x61, 0x80, 0x09,
    0x65, 0xE7, 0xF2, 0xE1, 0xF6, 0x65, 0x81, 0xF6, 0xD6, 0x4B, 0x0B, 0xE3, 0xED, 0x62, 0x80, 0x03,
    0x0F, 0xE9, 0xEE, 0xF4, 0xE5, 0xE7, 0xF2, 0xE1, 0x6C, 0x80, 0x22, 0x2C, 0xEC, 0xEF, 0xF7, 0xEC,
    0xE9, 0xEE, 0x65, 0x81, 0x20, 0x17, 0x4B, 0x28, 0xE3, 0xED, 0x62, 0x80, 0x03, 0x33, 0xEF, 0xF6,
    0xE5, 0xF2, 0xEC, 0xE9, 0xEE, 0xE5, 0xE3, 0xED, 0x62, 0x80, 0x03, 0x3F, 0xF0, 0xF2, 0xE9, 0xED,
    0xE5, 0xED, 0xEF, 0x64, 0x80, 0x02, 0xBA, 0xF6, 0xE5, 0xF2, 0xF4, 0xE9, 0xE3, 0xE1, 0x6C, 0x02,
    0x4B, 0x54, 0x4B, 0x5A, 0xE2, 0xE1, 0x72, 0x80, 0x20, 0x16, 0xEC, 0xE9, 0xEE, 0xE5, 0xE1, 0xE2,
    0xEF, 0xF6, 0xE5, 0xE3, 0xED, 0x62, 0x80, 0x03, 0x0E, 0xEF, 0xF0, 0xEF, 0xED, 0xEF, 0xE6, 0x6F,
    0x80, 0x31, 0x09, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0xC8, 0x63, 0x04, 0x4B, 0x86,
    0x4B, 0x8D, 0x4B, 0x96, 0x4B, 0xB1, 0xE1, 0xF2, 0xEF, 0x6E, 0x80, 0x01, 0x0F, 0xE5, 0xE4, 0xE9,
    0xEC, 0xEC, 0x61, 0x80, 0x1E, 0x11, 0xE9, 0xF2, 0x63, 0x02, 0x4B, 0x9E, 0x4B, 0xA3, 0xEC, 0x65,
    0x80, 0x24, 0xD3, 0xF5, 0xED, 0xE6, 0xEC, 0xE5, 0xF8, 0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E,
    0x13, 0xF2, 0xEF, 0xE1, 0x74, 0x80, 0x01, 0x11, 0x64, 0x04, 0x4B, 0xC2, 0x4C, 0x13, 0x4C, 0x1D,
    0x4C, 0x50, 0x61, 0x04, 0x4B, 0xCC, 0x4B, 0xD6, 0x4B, 0xDD, 0x4B, 0xF6, 0xE2, 0xE5, 0xEE, 0xE7,
    0xE1, 0xEC, 0x69, 0x80, 0x09, 0xA1, 0xE4, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x21, 0xE7, 0x75, 0x02,
    0x4B, 0xE4, 0x4B, 0xED, 0xEA, 0xE1, 0xF2, 0xE1, 0xF4, 0x69, 0x80, 0x0A, 0xA1, 0xF2, 0xED, 0xF5,
    0xEB, 0xE8, 0x69, 0x80, 0x0A, 0x21, 0x6C, 0x02, 0x4B, 0xFC, 0x4C, 0x05, 0xE1, 0xF2, 0xE1, 0xE2,
    0xE9, 0x63, 0x80, 0x06, 0x88, 0xE6, 0xE9, 0xEE, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63,
    0x80, 0xFB, 0x89, 0xE4, 0xE8, 0xE1, 0xE4, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x5C, 0xE8, 0x61, 0x03,
    0x4C, 0x26, 0x4C, 0x30, 0x4C, 0x37, 0xE2, 0xE5, 0xEE, 0xE7, 0xE1, 0xEC, 0x69, 0x80, 0x09, 0xA2,
    0xE4, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x22, 0xE7, 0x75, 0x02, 0x4C, 0x3E, 0x4C, 0x47, 0xEA, 0xE1,
    0xF2, 0xE1, 0xF4, 0x69, 0x80, 0x0A, 0xA2, 0xF2, 0xED, 0xF5, 0xEB, 0xE8, 0x69, 0x80, 0x0A, 0x22,
    0xEF, 0x74, 0x02, 0x4C, 0x57, 0x4C, 0x60, 0xE1, 0xE3, 0xE3, 0xE5, 0xEE, 0x74, 0x80, 0x1E, 0x0B,
    0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E, 0x0D, 0x65, 0x08, 0x4C, 0x7A, 0x4C, 0xAF, 0x4C, 0xB6,
    0x4C, 0xCF, 0x4C, 0xD9, 0x4C, 0xE4, 0x4D, 0x11, 0x4D, 0x35, 0x63, 0x02, 0x4C, 0x80, 0x4C, 0xA5,
    0xE9, 0xED, 0xE1, 0xEC, 0xF3, 0xE5, 0xF0, 0xE1, 0xF2, 0xE1, 0xF4, 0xEF, 0x72, 0x02, 0x4C, 0x92,
    0x4C, 0x9B, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0x06, 0x6B, 0xF0, 0xE5, 0xF2, 0xF3, 0xE9,
    0xE1, 0x6E, 0x80, 0x06, 0x6B, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x34, 0xE7,
    0xF2, 0xE5, 0x65, 0x80, 0x00, 0xB0, 0xE8, 0x69, 0x02, 0x4C, 0xBD, 0x4C, 0xC6, 0xE8, 0xE5, 0xE2,
    0xF2, 0xE5, 0x77, 0x80, 0x05, 0xAD, 0xF2, 0xE1, 0xE7, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0x67, 0xE9,
    0xE3, 0xEF, 0xF0, 0xF4, 0xE9, 0x63, 0x80, 0x03, 0xEF, 0xEB, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1, 0xEE,
    0x61, 0x80, 0x30, 0xC7, 0x6C, 0x02, 0x4C, 0xEA, 0x4D, 0x01, 0xE5, 0xF4, 0x65, 0x02, 0x4C, 0xF2,
    0x4C, 0xF9, 0xEC, 0xE5, 0xE6, 0x74, 0x80, 0x23, 0x2B, 0xF2, 0xE9, 0xE7, 0xE8, 0x74, 0x80, 0x23,
    0x26, 0xF4, 0x61, 0x81, 0x03, 0xB4, 0x4D, 0x08, 0xF4, 0xF5, 0xF2, 0xEE, 0xE5, 0x64, 0x80, 0x01,
    0x8D, 0xEE, 0xEF, 0xED, 0xE9, 0xEE, 0xE1, 0xF4, 0xEF, 0xF2, 0xED, 0xE9, 0xEE, 0xF5, 0xF3, 0xEF,
    0xEE, 0xE5, 0xEE, 0xF5, 0xED, 0xE5, 0xF2, 0xE1, 0xF4, 0xEF, 0xF2, 0xE2, 0xE5, 0xEE, 0xE7, 0xE1,
    0xEC, 0x69, 0x80, 0x09, 0xF8, 0xFA, 0x68, 0x80, 0x02, 0xA4, 0x68, 0x02, 0x4D, 0x40, 0x4D, 0x72,
    0x61, 0x03, 0x4D, 0x48, 0x4D, 0x52, 0x4D, 0x59, 0xE2, 0xE5, 0xEE, 0xE7, 0xE1, 0xEC, 0x69, 0x80,
    0x09, 0xA7, 0xE4, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x27, 0xE7, 0x75, 0x02, 0x4D, 0x60, 0x4D, 0x69,
    0xEA, 0xE1, 0xF2, 0xE1, 0xF4, 0x69, 0x80, 0x0A, 0xA7, 0xF2, 0xED, 0xF5, 0xEB, 0xE8, 0x69, 0x80,
    0x0A, 0x27, 0xEF, 0xEF, 0x6B, 0x80, 0x02, 0x57, 0x69, 0x06, 0x4D, 0x86, 0x4D, 0xB7, 0x4D, 0xF3,
    0x4D, 0xFE, 0x4E, 0x09, 0x4E, 0x13, 0x61, 0x02, 0x4D, 0x8C, 0x4D, 0xA2, 0xEC, 0xF9, 0xF4, 0xE9,
    0xEB, 0xE1, 0xF4, 0xEF, 0xEE, 0xEF, 0x73, 0x81, 0x03, 0x85, 0x4D, 0x9C, 0xE3, 0xED, 0x62, 0x80,
    0x03, 0x44, 0xED, 0xEF, 0xEE, 0x64, 0x81, 0x26, 0x66, 0x4D, 0xAB, 0xF3, 0xF5, 0xE9, 0xF4, 0xF7,
    0xE8, 0xE9, 0xF4, 0x65, 0x80, 0x26, 0x62, 0xE5, 0xF2, 0xE5, 0xF3, 0xE9, 0x73, 0x85, 0x00, 0xA8,
    0x4D, 0xCA, 0x4D, 0xD2, 0x4D, 0xDD, 0x4D, 0xE3, 0x4D, 0xEB, 0xE1, 0xE3, 0xF5, 0xF4, 0x65, 0x80,
    0xF6, 0xD7, 0xE2, 0xE5, 0xEC, 0xEF, 0xF7, 0xE3, 0xED, 0x62, 0x80, 0x03, 0x24, 0xE3, 0xED, 0x62,
    0x80, 0x03, 0x08, 0xE7, 0xF2, 0xE1, 0xF6, 0x65, 0x80, 0xF6, 0xD8, 0xF4, 0xEF, 0xEE, 0xEF, 0x73,
    0x80, 0x03, 0x85, 0xE8, 0xE9, 0xF2, 0xE1, 0xE7, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0x62, 0xEB, 0xE1,
    0xF4, 0xE1, 0xEB, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0xC2, 0xF4, 0xF4, 0xEF, 0xED, 0xE1, 0xF2, 0x6B,
    0x80, 0x30, 0x03, 0xF6, 0x69, 0x02, 0x4E, 0x1A, 0x4E, 0x25, 0xE4, 0x65, 0x81, 0x00, 0xF7, 0x4E,
    0x21, 0x73, 0x80, 0x22, 0x23, 0xF3, 0xE9, 0xEF, 0xEE, 0xF3, 0xEC, 0xE1, 0xF3, 0x68, 0x80, 0x22,
    0x15, 0xEA, 0xE5, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x52, 0xEB, 0xF3,
    0xE8, 0xE1, 0xE4, 0x65, 0x80, 0x25, 0x93, 0x6C, 0x02, 0x4E, 0x4D, 0x4E, 0x58, 0xE9, 0xEE, 0xE5,
    0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E, 0x0F, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33,
    0x97, 0x6D, 0x02, 0x4E, 0x67, 0x4E, 0x6F, 0xE1, 0xE3, 0xF2, 0xEF, 0x6E, 0x80, 0x01, 0x11, 0xEF,
    0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80, 0xFF, 0x44, 0xEE, 0xE2, 0xEC, 0xEF, 0xE3, 0x6B,
    0x80, 0x25, 0x84, 0x6F, 0x0A, 0x4E, 0x99, 0x4E, 0xA5, 0x4E, 0xAF, 0x4E, 0xBA, 0x4E, 0xC5, 0x4F,
    0x0D, 0x4F, 0x12, 0x4F, 0x1D, 0x4F, 0x90, 0x4F, 0xAA, 0xE3, 0xE8, 0xE1, 0xE4, 0xE1, 0xF4, 0xE8,
    0xE1, 0x69, 0x80, 0x0E, 0x0E, 0xE4, 0xE5, 0xEB, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x14, 0xE8,
    0xE9, 0xF2, 0xE1, 0xE7, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0x69, 0xEB, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1,
    0xEE, 0x61, 0x80, 0x30, 0xC9, 0xEC, 0xEC, 0xE1, 0x72, 0x84, 0x00, 0x24, 0x4E, 0xD4, 0x4E, 0xDF,
    0x4E, 0xEB, 0x4E, 0xF6, 0xE9, 0xEE, 0xE6, 0xE5, 0xF2, 0xE9, 0xEF, 0x72, 0x80, 0xF6, 0xE3, 0xED,
    0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80, 0xFF, 0x04, 0xEF, 0xEC, 0xE4, 0xF3, 0xF4,
    0xF9, 0xEC, 0x65, 0x80, 0xF7, 0x24, 0x73, 0x02, 0x4E, 0xFC, 0x4F, 0x03, 0xED, 0xE1, 0xEC, 0x6C,
    0x80, 0xFE, 0x69, 0xF5, 0xF0, 0xE5, 0xF2, 0xE9, 0xEF, 0x72, 0x80, 0xF6, 0xE4, 0xEE, 0x67, 0x80,
    0x20, 0xAB, 0xF2, 0xF5, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0x26, 0x74, 0x06, 0x4F,
    0x2B, 0x4F, 0x3C, 0x4F, 0x52, 0x4F, 0x5D, 0x4F, 0x7D, 0x4F, 0x84, 0xE1, 0xE3, 0xE3, 0xE5, 0xEE,
    0x74, 0x81, 0x02, 0xD9, 0x4F, 0x36, 0xE3, 0xED, 0x62, 0x80, 0x03, 0x07, 0xE2, 0xE5, 0xEC, 0xEF,
    0xF7, 0x63, 0x02, 0x4F, 0x47, 0x4F, 0x4C, 0xED, 0x62, 0x80, 0x03, 0x23, 0xEF, 0xED, 0x62, 0x80,
    0x03, 0x23, 0xEB, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0xFB, 0xEC, 0xE5, 0xF3,
    0x73, 0x02, 0x4F, 0x66, 0x4F, 0x6A, 0x69, 0x80, 0x01, 0x31, 0x6A, 0x81, 0xF6, 0xBE, 0x4F, 0x70,
    0xF3, 0xF4, 0xF2, 0xEF, 0xEB, 0xE5, 0xE8, 0xEF, 0xEF, 0x6B, 0x80, 0x02, 0x84, 0xED, 0xE1, 0xF4,
    0x68, 0x80, 0x22, 0xC5, 0xF4, 0xE5, 0xE4, 0xE3, 0xE9, 0xF2, 0xE3, 0xEC, 0x65, 0x80, 0x25, 0xCC,
    0xF5, 0xE2, 0xEC, 0xE5, 0xF9, 0xEF, 0xE4, 0xF0, 0xE1, 0xF4, 0xE1, 0x68, 0x81, 0xFB, 0x1F, 0x4F,
    0xA1, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0xFB, 0x1F, 0xF7, 0xEE, 0xF4, 0xE1, 0xE3, 0x6B,
    0x02, 0x4F, 0xB5, 0x4F, 0xC0, 0xE2, 0xE5, 0xEC, 0xEF, 0xF7, 0xE3, 0xED, 0x62, 0x80, 0x03, 0x1E,
    0xED, 0xEF, 0x64, 0x80, 0x02, 0xD5, 0xF0, 0xE1, 0xF2, 0xE5, 0x6E, 0x80, 0x24, 0x9F, 0xF3, 0xF5,
    0xF0, 0xE5, 0xF2, 0xE9, 0xEF, 0x72, 0x80, 0xF6, 0xEB, 0x74, 0x02, 0x4F, 0xDF, 0x4F, 0xE5, 0xE1,
    0xE9, 0x6C, 0x80, 0x02, 0x56, 0xEF, 0xF0, 0xE2, 0xE1, 0x72, 0x80, 0x01, 0x8C, 0x75, 0x02, 0x4F,
    0xF3, 0x4F, 0xFE, 0xE8, 0xE9, 0xF2, 0xE1, 0xE7, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0x65, 0xEB, 0xE1,
    0xF4, 0xE1, 0xEB, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0xC5, 0x7A, 0x84, 0x01, 0xF3, 0x50, 0x15, 0x50,
    0x1E, 0x50, 0x31, 0x50, 0x56, 0xE1, 0xEC, 0xF4, 0xEF, 0xEE, 0x65, 0x80, 0x02, 0xA3, 0x63, 0x02,
    0x50, 0x24, 0x50, 0x2B, 0xE1, 0xF2, 0xEF, 0x6E, 0x80, 0x01, 0xC6, 0xF5, 0xF2, 0x6C, 0x80, 0x02,
    0xA5, 0x65, 0x02, 0x50, 0x37, 0x50, 0x4B, 0xE1, 0xE2, 0xEB, 0xE8, 0xE1, 0xF3, 0xE9, 0xE1, 0xEE,
    0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0xE1, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC,
    0xEC, 0xE9, 0x63, 0x80, 0x04, 0x55, 0xE8, 0xE5, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63,
    0x80, 0x04, 0x5F, 0x65, 0x97, 0x00, 0x65, 0x50, 0x95, 0x50, 0xA8, 0x50, 0xCA, 0x51, 0xB0, 0x51,
    0xEE, 0x52, 0x0F, 0x52, 0x1B, 0x52, 0x32, 0x52, 0x67, 0x53, 0xD7, 0x54, 0x11, 0x54, 0x77, 0x54,
    0xEB, 0x55, 0x72, 0x55, 0xBD, 0x55, 0xDC, 0x56, 0x1A, 0x56, 0x4F, 0x57, 0x0E, 0x57, 0x93, 0x57,
    0xA7, 0x57, 0xD3, 0x58, 0x2E, 0x61, 0x02, 0x50, 0x9B, 0x50, 0xA2, 0xE3, 0xF5, 0xF4, 0x65, 0x80,
    0x00, 0xE9, 0xF2, 0xF4, 0x68, 0x80, 0x26, 0x41, 0x62, 0x03, 0x50, 0xB0, 0x50, 0xB9, 0x50, 0xC3,
    0xE5, 0xEE, 0xE7, 0xE1, 0xEC, 0x69, 0x80, 0x09, 0x8F, 0xEF, 0xF0, 0xEF, 0xED, 0xEF, 0xE6, 0x6F,
    0x80, 0x31, 0x1C, 0xF2, 0xE5, 0xF6, 0x65, 0x80, 0x01, 0x15, 0x63, 0x05, 0x50, 0xD6, 0x51, 0x1F,
    0x51, 0x2D, 0x51, 0x4D, 0x51, 0xA6, 0x61, 0x02, 0x50, 0xDC, 0x51, 0x19, 0xEE, 0xE4, 0xF2, 0x61,
    0x03, 0x50, 0xE7, 0x50, 0xEE, 0x50, 0xF9, 0xE4, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x0D, 0xE7, 0xF5,
    0xEA, 0xE1, 0xF2, 0xE1, 0xF4, 0x69, 0x80, 0x0A, 0x8D, 0xF6, 0xEF, 0xF7, 0xE5, 0xEC, 0xF3, 0xE9,
    0xE7, 0x6E, 0x02, 0x51, 0x07, 0x51, 0x0E, 0xE4, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x45, 0xE7, 0xF5,
    0xEA, 0xE1, 0xF2, 0xE1, 0xF4, 0x69, 0x80, 0x0A, 0xC5, 0xF2, 0xEF, 0x6E, 0x80, 0x01, 0x1B, 0xE5,
    0xE4, 0xE9, 0xEC, 0xEC, 0xE1, 0xE2, 0xF2, 0xE5, 0xF6, 0x65, 0x80, 0x1E, 0x1D, 0x68, 0x02, 0x51,
    0x33, 0x51, 0x3E, 0xE1, 0xF2, 0xED, 0xE5, 0xEE, 0xE9, 0xE1, 0x6E, 0x80, 0x05, 0x65, 0xF9, 0xE9,
    0xF7, 0xEE, 0xE1, 0xF2, 0xED, 0xE5, 0xEE, 0xE9, 0xE1, 0x6E, 0x80, 0x05, 0x87, 0xE9, 0xF2, 0x63,
    0x02, 0x51, 0x55, 0x51, 0x5A, 0xEC, 0x65, 0x80, 0x24, 0xD4, 0xF5, 0xED, 0xE6, 0xEC, 0xE5, 0x78,
    0x86, 0x00, 0xEA, 0x51, 0x6F, 0x51, 0x77, 0x51, 0x7F, 0x51, 0x8A, 0x51, 0x92, 0x51, 0x9E, 0xE1,
    0xE3, 0xF5, 0xF4, 0x65, 0x80, 0x1E, 0xBF, 0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E, 0x19, 0xE4,
    0xEF, 0xF4, 0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E, 0xC7, 0xE7, 0xF2, 0xE1, 0xF6, 0x65, 0x80,
    0x1E, 0xC1, 0xE8, 0xEF, 0xEF, 0xEB, 0xE1, 0xE2, 0xEF, 0xF6, 0x65, 0x80, 0x1E, 0xC3, 0xF4, 0xE9,
    0xEC, 0xE4, 0x65, 0x80, 0x1E, 0xC5, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x54,
    0x64, 0x04, 0x51, 0xBA, 0x51, 0xC4, 0x51, 0xCA, 0x51, 0xD4, 0xE2, 0xEC, 0xE7, 0xF2, 0xE1, 0xF6,
    0x65, 0x80, 0x02, 0x05, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x0F, 0xE9, 0xE5, 0xF2, 0xE5, 0xF3, 0xE9,
    0x73, 0x80, 0x00, 0xEB, 0xEF, 0x74, 0x82, 0x01, 0x17, 0x51, 0xDD, 0x51, 0xE6, 0xE1, 0xE3, 0xE3,
    0xE5, 0xEE, 0x74, 0x80, 0x01, 0x17, 0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E, 0xB9, 0x65, 0x02,
    0x51, 0xF4, 0x51, 0xFF, 0xE7, 0xF5, 0xF2, 0xED, 0xF5, 0xEB, 0xE8, 0x69, 0x80, 0x0A, 0x0F, 0xED,
    0xE1, 0xF4, 0xF2, 0xE1, 0xE7, 0xF5, 0xF2, 0xED, 0xF5, 0xEB, 0xE8, 0x69, 0x80, 0x0A, 0x47, 0xE6,
    0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x44, 0x67, 0x02, 0x52, 0x21, 0x52,
    0x28, 0xF2, 0xE1, 0xF6, 0x65, 0x80, 0x00, 0xE8, 0xF5, 0xEA, 0xE1, 0xF2, 0xE1, 0xF4, 0x69, 0x80,
    0x0A, 0x8F, 0x68, 0x04, 0x52, 0x3C, 0x52, 0x47, 0x52, 0x52, 0x52, 0x5C, 0xE1, 0xF2, 0xED, 0xE5,
    0xEE, 0xE9, 0xE1, 0x6E, 0x80, 0x05, 0x67, 0xE2, 0xEF, 0xF0, 0xEF, 0xED, 0xEF, 0xE6, 0x6F, 0x80,
    0x31, 0x1D, 0xE9, 0xF2, 0xE1, 0xE7, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0x48, 0xEF, 0xEF, 0xEB, 0xE1,
    0xE2, 0xEF, 0xF6, 0x65, 0x80, 0x1E, 0xBB, 0x69, 0x04, 0x52, 0x71, 0x52, 0x7C, 0x53, 0xB6, 0x53,
    0xC5, 0xE2, 0xEF, 0xF0, 0xEF, 0xED, 0xEF, 0xE6, 0x6F, 0x80, 0x31, 0x1F, 0xE7, 0xE8, 0x74, 0x8E,
    0x00, 0x38, 0x52, 0x9E, 0x52, 0xA7, 0x52, 0xB1, 0x52, 0xCF, 0x52, 0xD6, 0x52, 0xFC, 0x53, 0x15,
    0x53, 0x42, 0x53, 0x64, 0x53, 0x70, 0x53, 0x7B, 0x53, 0x9C, 0x53, 0xA4, 0x53, 0xAF, 0xE1, 0xF2,
    0xE1, 0xE2, 0xE9, 0x63, 0x80, 0x06, 0x68, 0xE2, 0xE5, 0xEE, 0xE7, 0xE1, 0xEC, 0x69, 0x80, 0x09,
    0xEE, 0xE3, 0xE9, 0xF2, 0xE3, 0xEC, 0x65, 0x81, 0x24, 0x67, 0x52, 0xBC, 0xE9, 0xEE, 0xF6, 0xE5,
    0xF2, 0xF3, 0xE5, 0xF3, 0xE1, 0xEE, 0xF3, 0xF3, 0xE5, 0xF2, 0xE9, 0x66, 0x80, 0x27, 0x91, 0xE4,
    0xE5, 0xF6, 0x61, 0x80, 0x09, 0x6E, 0xE5, 0xE5, 0x6E, 0x02, 0x52, 0xDE, 0x52, 0xE7, 0xE3, 0xE9,
    0xF2, 0xE3, 0xEC, 0x65, 0x80, 0x24, 0x71, 0x70, 0x02, 0x52, 0xED, 0x52, 0xF4, 0xE1, 0xF2, 0xE5,
    0x6E, 0x80, 0x24, 0x85, 0xE5, 0xF2, 0xE9, 0xEF, 0x64, 0x80, 0x24, 0x99, 0xE7, 0x75, 0x02, 0x53,
    0x03, 0x53, 0x0C, 0xEA, 0xE1, 0xF2, 0xE1, 0xF4, 0x69, 0x80, 0x0A, 0xEE, 0xF2, 0xED, 0xF5, 0xEB,
    0xE8, 0x69, 0x80, 0x0A, 0x6E, 0x68, 0x02, 0x53, 0x1B, 0x53, 0x35, 0x61, 0x02, 0x53, 0x21, 0x53,
    0x2C, 0xE3, 0xEB, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0x06, 0x68, 0xEE, 0xE7, 0xFA, 0xE8,
    0xEF, 0x75, 0x80, 0x30, 0x28, 0xEE, 0xEF, 0xF4, 0xE5, 0xE2, 0xE5, 0xE1, 0xED, 0xE5, 0x64, 0x80,
    0x26, 0x6B, 0x69, 0x02, 0x53, 0x48, 0x53, 0x5A, 0xE4, 0xE5, 0xEF, 0xE7, 0xF2, 0xE1, 0xF0, 0xE8,
    0xE9, 0xE3, 0xF0, 0xE1, 0xF2, 0xE5, 0x6E, 0x80, 0x32, 0x27, 0xEE, 0xE6, 0xE5, 0xF2, 0xE9, 0xEF,
    0x72, 0x80, 0x20, 0x88, 0xED, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80, 0xFF, 0x18,
    0xEF, 0xEC, 0xE4, 0xF3, 0xF4, 0xF9, 0xEC, 0x65, 0x80, 0xF7, 0x38, 0x70, 0x02, 0x53, 0x81, 0x53,
    0x88, 0xE1, 0xF2, 0xE5, 0x6E, 0x80, 0x24, 0x7B, 0xE5, 0x72, 0x02, 0x53, 0x8F, 0x53, 0x95, 0xE9,
    0xEF, 0x64, 0x80, 0x24, 0x8F, 0xF3, 0xE9, 0xE1, 0x6E, 0x80, 0x06, 0xF8, 0xF2, 0xEF, 0xED, 0xE1,
    0x6E, 0x80, 0x21, 0x77, 0xF3, 0xF5, 0xF0, 0xE5, 0xF2, 0xE9, 0xEF, 0x72, 0x80, 0x20, 0x78, 0xF4,
    0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x58, 0xEE, 0xF6, 0xE5, 0xF2, 0xF4, 0xE5, 0xE4, 0xE2, 0xF2, 0xE5,
    0xF6, 0x65, 0x80, 0x02, 0x07, 0xEF, 0xF4, 0xE9, 0xE6, 0xE9, 0xE5, 0xE4, 0xE3, 0xF9, 0xF2, 0xE9,
    0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x65, 0x6B, 0x02, 0x53, 0xDD, 0x53, 0xF5, 0xE1, 0xF4, 0xE1,
    0xEB, 0xE1, 0xEE, 0x61, 0x81, 0x30, 0xA8, 0x53, 0xE9, 0xE8, 0xE1, 0xEC, 0xE6, 0xF7, 0xE9, 0xE4,
    0xF4, 0x68, 0x80, 0xFF, 0x74, 0x6F, 0x02, 0x53, 0xFB, 0x54, 0x0A, 0xEE, 0xEB, 0xE1, 0xF2, 0xE7,
    0xF5, 0xF2, 0xED, 0xF5, 0xEB, 0xE8, 0x69, 0x80, 0x0A, 0x74, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31,
    0x54, 0x6C, 0x03, 0x54, 0x19, 0x54, 0x24, 0x54, 0x61, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9,
    0x63, 0x80, 0x04, 0x3B, 0x65, 0x02, 0x54, 0x2A, 0x54, 0x31, 0xED, 0xE5, 0xEE, 0x74, 0x80, 0x22,
    0x08, 0xF6, 0xE5, 0x6E, 0x03, 0x54, 0x3B, 0x54, 0x44, 0x54, 0x59, 0xE3, 0xE9, 0xF2, 0xE3, 0xEC,
    0x65, 0x80, 0x24, 0x6A, 0x70, 0x02, 0x54, 0x4A, 0x54, 0x51, 0xE1, 0xF2, 0xE5, 0x6E, 0x80, 0x24,
    0x7E, 0xE5, 0xF2, 0xE9, 0xEF, 0x64, 0x80, 0x24, 0x92, 0xF2, 0xEF, 0xED, 0xE1, 0x6E, 0x80, 0x21,
    0x7A, 0xEC, 0xE9, 0xF0, 0xF3, 0xE9, 0x73, 0x81, 0x20, 0x26, 0x54, 0x6C, 0xF6, 0xE5, 0xF2, 0xF4,
    0xE9, 0xE3, 0xE1, 0x6C, 0x80, 0x22, 0xEE, 0x6D, 0x05, 0x54, 0x83, 0x54, 0x9F, 0x54, 0xAA, 0x54,
    0xBE, 0x54, 0xC9, 0xE1, 0xE3, 0xF2, 0xEF, 0x6E, 0x82, 0x01, 0x13, 0x54, 0x8F, 0x54, 0x97, 0xE1,
    0xE3, 0xF5, 0xF4, 0x65, 0x80, 0x1E, 0x17, 0xE7, 0xF2, 0xE1, 0xF6, 0x65, 0x80, 0x1E, 0x15, 0xE3,
    0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x3C, 0xE4, 0xE1, 0xF3, 0x68, 0x81, 0x20,
    0x14, 0x54, 0xB3, 0xF6, 0xE5, 0xF2, 0xF4, 0xE9, 0xE3, 0xE1, 0x6C, 0x80, 0xFE, 0x31, 0xEF, 0xEE,
    0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80, 0xFF, 0x45, 0x70, 0x02, 0x54, 0xCF, 0x54, 0xE3, 0xE8,
    0xE1, 0xF3, 0xE9, 0xF3, 0xED, 0xE1, 0xF2, 0xEB, 0xE1, 0xF2, 0xED, 0xE5, 0xEE, 0xE9, 0xE1, 0x6E,
    0x80, 0x05, 0x5B, 0xF4, 0xF9, 0xF3, 0xE5, 0x74, 0x80, 0x22, 0x05, 0x6E, 0x06, 0x54, 0xF9, 0x55,
    0x04, 0x55, 0x0F, 0x55, 0x3B, 0x55, 0x5B, 0x55, 0x6A, 0xE2, 0xEF, 0xF0, 0xEF, 0xED, 0xEF, 0xE6,
    0x6F, 0x80, 0x31, 0x23, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x3D, 0x64,
    0x02, 0x55, 0x15, 0x55, 0x28, 0xE1, 0xF3, 0x68, 0x81, 0x20, 0x13, 0x55, 0x1D, 0xF6, 0xE5, 0xF2,
    0xF4, 0xE9, 0xE3, 0xE1, 0x6C, 0x80, 0xFE, 0x32, 0xE5, 0xF3, 0xE3, 0xE5, 0xEE, 0xE4, 0xE5, 0xF2,
    0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0xA3, 0x67, 0x82, 0x01, 0x4B, 0x55,
    0x43, 0x55, 0x4E, 0xE2, 0xEF, 0xF0, 0xEF, 0xED, 0xEF, 0xE6, 0x6F, 0x80, 0x31, 0x25, 0xE8, 0xE5,
    0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0xA5, 0xE8, 0xEF, 0xEF, 0xEB, 0xE3,
    0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0xC8, 0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80,
    0x20, 0x02, 0x6F, 0x03, 0x55, 0x7A, 0x55, 0x82, 0x55, 0x8B, 0xE7, 0xEF, 0xEE, 0xE5, 0x6B, 0x80,
    0x01, 0x19, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31, 0x53, 0xF0, 0xE5, 0x6E, 0x82, 0x02,
    0x5B, 0x55, 0x95, 0x55, 0x9E, 0xE3, 0xEC, 0xEF, 0xF3, 0xE5, 0x64, 0x80, 0x02, 0x9A, 0xF2, 0xE5,
    0xF6, 0xE5, 0xF2, 0xF3, 0xE5, 0x64, 0x82, 0x02, 0x5C, 0x55, 0xAD, 0x55, 0xB6, 0xE3, 0xEC, 0xEF,
    0xF3, 0xE5, 0x64, 0x80, 0x02, 0x5E, 0xE8, 0xEF, 0xEF, 0x6B, 0x80, 0x02, 0x5D, 0x70, 0x02, 0x55,
    0xC3, 0x55, 0xCA, 0xE1, 0xF2, 0xE5, 0x6E, 0x80, 0x24, 0xA0, 0xF3, 0xE9, 0xEC, 0xEF, 0x6E, 0x81,
    0x03, 0xB5, 0x55, 0xD4, 0xF4, 0xEF, 0xEE, 0xEF, 0x73, 0x80, 0x03, 0xAD, 0xF1, 0x75, 0x02, 0x55,
    0xE3, 0x56, 0x0F, 0xE1, 0x6C, 0x82, 0x00, 0x3D, 0x55, 0xEC, 0x55, 0xF8, 0xED, 0xEF, 0xEE, 0xEF,
    0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80, 0xFF, 0x1D, 0x73, 0x02, 0x55, 0xFE, 0x56, 0x05, 0xED, 0xE1,
    0xEC, 0x6C, 0x80, 0xFE, 0x66, 0xF5, 0xF0, 0xE5, 0xF2, 0xE9, 0xEF, 0x72, 0x80, 0x20, 0x7C, 0xE9,
    0xF6, 0xE1, 0xEC, 0xE5, 0xEE, 0xE3, 0x65, 0x80, 0x22, 0x61, 0x72, 0x03, 0x56, 0x22, 0x56, 0x2D,
    0x56, 0x38, 0xE2, 0xEF, 0xF0, 0xEF, 0xED, 0xEF, 0xE6, 0x6F, 0x80, 0x31, 0x26, 0xE3, 0xF9, 0xF2,
    0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x40, 0xE5, 0xF6, 0xE5, 0xF2, 0xF3, 0xE5, 0x64, 0x81,
    0x02, 0x58, 0x56, 0x44, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x4D, 0x73,
    0x06, 0x56, 0x5D, 0x56, 0x68, 0x56, 0x7C, 0x56, 0xCD, 0x56, 0xFA, 0x57, 0x04, 0xE3, 0xF9, 0xF2,
    0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x41, 0xE4, 0xE5, 0xF3, 0xE3, 0xE5, 0xEE, 0xE4, 0xE5,
    0xF2, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0xAB, 0x68, 0x84, 0x02, 0x83,
    0x56, 0x88, 0x56, 0x8F, 0x56, 0xAE, 0x56, 0xBD, 0xE3, 0xF5, 0xF2, 0x6C, 0x80, 0x02, 0x86, 0xEF,
    0xF2, 0x74, 0x02, 0x56, 0x97, 0x56, 0x9E, 0xE4, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x0E, 0xF6, 0xEF,
    0xF7, 0xE5, 0xEC, 0xF3, 0xE9, 0xE7, 0xEE, 0xE4, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x46, 0xF2, 0xE5,
    0xF6, 0xE5, 0xF2, 0xF3, 0xE5, 0xE4, 0xEC, 0xEF, 0xEF, 0x70, 0x80, 0x01, 0xAA, 0xF3, 0xF1, 0xF5,
    0xE1, 0xF4, 0xF2, 0xE5, 0xF6, 0xE5, 0xF2, 0xF3, 0xE5, 0x64, 0x80, 0x02, 0x85, 0xED, 0xE1, 0xEC,
    0x6C, 0x02, 0x56, 0xD6, 0x56, 0xE1, 0xE8, 0xE9, 0xF2, 0xE1, 0xE7, 0xE1, 0xEE, 0x61, 0x80, 0x30,
    0x47, 0xEB, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1, 0xEE, 0x61, 0x81, 0x30, 0xA7, 0x56, 0xEE, 0xE8, 0xE1,
    0xEC, 0xE6, 0xF7, 0xE9, 0xE4, 0xF4, 0x68, 0x80, 0xFF, 0x6A, 0xF4, 0xE9, 0xED, 0xE1, 0xF4, 0xE5,
    0x64, 0x80, 0x21, 0x2E, 0xF5, 0xF0, 0xE5, 0xF2, 0xE9, 0xEF, 0x72, 0x80, 0xF6, 0xEC, 0x74, 0x05,
    0x57, 0x1A, 0x57, 0x34, 0x57, 0x38, 0x57, 0x49, 0x57, 0x8B, 0x61, 0x82, 0x03, 0xB7, 0x57, 0x22,
    0x57, 0x2C, 0xF2, 0xED, 0xE5, 0xEE, 0xE9, 0xE1, 0x6E, 0x80, 0x05, 0x68, 0xF4, 0xEF, 0xEE, 0xEF,
    0x73, 0x80, 0x03, 0xAE, 0x68, 0x80, 0x00, 0xF0, 0xE9, 0xEC, 0xE4, 0x65, 0x81, 0x1E, 0xBD, 0x57,
    0x41, 0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E, 0x1B, 0xEE, 0xE1, 0xE8, 0xF4, 0x61, 0x03, 0x57,
    0x55, 0x57, 0x75, 0x57, 0x7E, 0xE6, 0xEF, 0xF5, 0xEB, 0x68, 0x02, 0x57, 0x5F, 0x57, 0x68, 0xE8,
    0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0x91, 0xEC, 0xE5, 0xE6, 0xF4, 0xE8, 0xE5, 0xE2, 0xF2,
    0xE5, 0x77, 0x80, 0x05, 0x91, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0x91, 0xEC, 0xE5,
    0xE6, 0xF4, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0x91, 0xF5, 0xF2, 0xEE, 0xE5, 0x64,
    0x80, 0x01, 0xDD, 0x75, 0x02, 0x57, 0x99, 0x57, 0xA2, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80,
    0x31, 0x61, 0xF2, 0x6F, 0x80, 0x20, 0xAC, 0xF6, 0xEF, 0xF7, 0xE5, 0xEC, 0xF3, 0xE9, 0xE7, 0x6E,
    0x03, 0x57, 0xB7, 0x57, 0xC1, 0x57, 0xC8, 0xE2, 0xE5, 0xEE, 0xE7, 0xE1, 0xEC, 0x69, 0x80, 0x09,
    0xC7, 0xE4, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x47, 0xE7, 0xF5, 0xEA, 0xE1, 0xF2, 0xE1, 0xF4, 0x69,
    0x80, 0x0A, 0xC7, 0x78, 0x02, 0x57, 0xD9, 0x58, 0x22, 0xE3, 0xEC, 0xE1, 0x6D, 0x84, 0x00, 0x21,
    0x57, 0xE8, 0x57, 0xF3, 0x58, 0x0E, 0x58, 0x1A, 0xE1, 0xF2, 0xED, 0xE5, 0xEE, 0xE9, 0xE1, 0x6E,
    0x80, 0x05, 0x5C, 0x64, 0x02, 0x57, 0xF9, 0x57, 0xFE, 0xE2, 0x6C, 0x80, 0x20, 0x3C, 0xEF, 0xF7,
    0x6E, 0x81, 0x00, 0xA1, 0x58, 0x06, 0xF3, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xF7, 0xA1, 0xED, 0xEF,
    0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80, 0xFF, 0x01, 0xF3, 0xED, 0xE1, 0xEC, 0x6C, 0x80,
    0xF7, 0x21, 0xE9, 0xF3, 0xF4, 0xE5, 0xEE, 0xF4, 0xE9, 0xE1, 0x6C, 0x80, 0x22, 0x03, 0xFA, 0x68,
    0x83, 0x02, 0x92, 0x58, 0x39, 0x58, 0x4C, 0x58, 0x57, 0x63, 0x02, 0x58, 0x3F, 0x58, 0x46, 0xE1,
    0xF2, 0xEF, 0x6E, 0x80, 0x01, 0xEF, 0xF5, 0xF2, 0x6C, 0x80, 0x02, 0x93, 0xF2, 0xE5, 0xF6, 0xE5,
    0xF2, 0xF3, 0xE5, 0x64, 0x80, 0x01, 0xB9, 0xF4, 0xE1, 0xE9, 0x6C, 0x80, 0x01, 0xBA, 0x66, 0x8C,
    0x00, 0x66, 0x58, 0x7A, 0x58, 0xCC, 0x58, 0xD7, 0x58, 0xE0, 0x58, 0xEC, 0x59, 0x53, 0x59, 0x63,
    0x5B, 0x6B, 0x5B, 0x78, 0x5B, 0x92, 0x5D, 0x17, 0x5D, 0x1F, 0x61, 0x04, 0x58, 0x84, 0x58, 0x8B,
    0x58, 0x96, 0x58, 0xA1, 0xE4, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x5E, 0xE7, 0xF5, 0xF2, 0xED, 0xF5,
    0xEB, 0xE8, 0x69, 0x80, 0x0A, 0x5E, 0xE8, 0xF2, 0xE5, 0xEE, 0xE8, 0xE5, 0xE9, 0x74, 0x80, 0x21,
    0x09, 0xF4, 0xE8, 0x61, 0x03, 0x58, 0xAB, 0x58, 0xB4, 0x58, 0xC0, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9,
    0x63, 0x80, 0x06, 0x4E, 0xEC, 0xEF, 0xF7, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0x06, 0x4E,
    0xF4, 0xE1, 0xEE, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0x06, 0x4B, 0xE2, 0xEF, 0xF0, 0xEF,
    0xED, 0xEF, 0xE6, 0x6F, 0x80, 0x31, 0x08, 0xE3, 0xE9, 0xF2, 0xE3, 0xEC, 0x65, 0x80, 0x24, 0xD5,
    0xE4, 0xEF, 0xF4, 0xE1, 0xE3, 0xE3, 0xE5, 0xEE, 0x74, 0x80, 0x1E, 0x1F, 0x65, 0x03, 0x58, 0xF4,
    0x59, 0x42, 0x59, 0x4C, 0x68, 0x04, 0x58, 0xFE, 0x59, 0x15, 0x59, 0x23, 0x59, 0x33, 0xE1, 0x72,
    0x02, 0x59, 0x05, 0x59, 0x0C, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0x06, 0x41, 0xED, 0xE5, 0xEE, 0xE9,
    0xE1, 0x6E, 0x80, 0x05, 0x86, 0xE6, 0xE9, 0xEE, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63,
    0x80, 0xFE, 0xD2, 0xE9, 0xEE, 0xE9, 0xF4, 0xE9, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63,
    0x80, 0xFE, 0xD3, 0xED, 0xE5, 0xE4, 0xE9, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80,
    0xFE, 0xD4, 0xE9, 0xE3, 0xEF, 0xF0, 0xF4, 0xE9, 0x63, 0x80, 0x03, 0xE5, 0xED, 0xE1, 0xEC, 0x65,
    0x80, 0x26, 0x40, 0x66, 0x82, 0xFB, 0x00, 0x59, 0x5B, 0x59, 0x5F, 0x69, 0x80, 0xFB, 0x03, 0x6C,
    0x80, 0xFB, 0x04, 0x69, 0x88, 0xFB, 0x01, 0x59, 0x77, 0x59, 0x9F, 0x59, 0xAA, 0x59, 0xC0, 0x5A,
    0x3A, 0x5A, 0x4B, 0x5A, 0x53, 0x5A, 0x60, 0xE6, 0xF4, 0xE5, 0xE5, 0x6E, 0x02, 0x59, 0x81, 0x59,
    0x8A, 0xE3, 0xE9, 0xF2, 0xE3, 0xEC, 0x65, 0x80, 0x24, 0x6E, 0x70, 0x02, 0x59, 0x90, 0x59, 0x97,
    0xE1, 0xF2, 0xE5, 0x6E, 0x80, 0x24, 0x82, 0xE5, 0xF2, 0xE9, 0xEF, 0x64, 0x80, 0x24, 0x96, 0xE7,
    0xF5, 0xF2, 0xE5, 0xE4, 0xE1, 0xF3, 0x68, 0x80, 0x20, 0x12, 0xEC, 0xEC, 0xE5, 0x64, 0x02, 0x59,
    0xB3, 0x59, 0xB9, 0xE2, 0xEF, 0x78, 0x80, 0x25, 0xA0, 0xF2, 0xE5, 0xE3, 0x74, 0x80, 0x25, 0xAC,
    0xEE, 0xE1, 0x6C, 0x05, 0x59, 0xCE, 0x59, 0xF5, 0x5A, 0x06, 0x5A, 0x17, 0x5A, 0x27, 0xEB, 0xE1,
    0x66, 0x82, 0x05, 0xDA, 0x59, 0xD8, 0x59, 0xEC, 0xE4, 0xE1, 0xE7, 0xE5, 0xF3, 0x68, 0x81, 0xFB,
    0x3A, 0x59, 0xE3, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0xFB, 0x3A, 0xE8, 0xE5, 0xE2, 0xF2,
    0xE5, 0x77, 0x80, 0x05, 0xDA, 0xED, 0xE5, 0x6D, 0x81, 0x05, 0xDD, 0x59, 0xFD, 0xE8, 0xE5, 0xE2,
    0xF2, 0xE5, 0x77, 0x80, 0x05, 0xDD, 0xEE, 0xF5, 0x6E, 0x81, 0x05, 0xDF, 0x5A, 0x0E, 0xE8, 0xE5,
    0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xDF, 0xF0, 0x65, 0x81, 0x05, 0xE3, 0x5A, 0x1E, 0xE8, 0xE5,
    0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xE3, 0xF4, 0xF3, 0xE1, 0xE4, 0x69, 0x81, 0x05, 0xE5, 0x5A,
    0x31, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xE5, 0xF2, 0xF3, 0xF4, 0xF4, 0xEF, 0xEE,
    0xE5, 0xE3, 0xE8, 0xE9, 0xEE, 0xE5, 0xF3, 0x65, 0x80, 0x02, 0xC9, 0xF3, 0xE8, 0xE5, 0xF9, 0x65,
    0x80, 0x25, 0xC9, 0xF4, 0xE1, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x73,
    0xF6, 0x65, 0x8E, 0x00, 0x35, 0x5A, 0x81, 0x5A, 0x8A, 0x5A, 0x94, 0x5A, 0xB2, 0x5A, 0xB9, 0x5A,
    0xC3, 0x5A, 0xDC, 0x5A, 0xF7, 0x5B, 0x19, 0x5B, 0x25, 0x5B, 0x30, 0x5B, 0x51, 0x5B, 0x59, 0x5B,
    0x64, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0x06, 0x65, 0xE2, 0xE5, 0xEE, 0xE7, 0xE1, 0xEC,
    0x69, 0x80, 0x09, 0xEB, 0xE3, 0xE9, 0xF2, 0xE3, 0xEC, 0x65, 0x81, 0x24, 0x64, 0x5A, 0x9F, 0xE9,
    0xEE, 0xF6, 0xE5, 0xF2, 0xF3, 0xE5, 0xF3, 0xE1, 0xEE, 0xF3, 0xF3, 0xE5, 0xF2, 0xE9, 0x66, 0x80,
    0x27, 0x8E, 0xE4, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x6B, 0xE5, 0xE9, 0xE7, 0xE8, 0xF4, 0xE8, 0x73,
    0x80, 0x21, 0x5D, 0xE7, 0x75, 0x02, 0x5A, 0xCA, 0x5A, 0xD3, 0xEA, 0xE1, 0xF2, 0xE1, 0xF4, 0x69,
    0x80, 0x0A, 0xEB, 0xF2, 0xED, 0xF5, 0xEB, 0xE8, 0x69, 0x80, 0x0A, 0x6B, 0xE8, 0x61, 0x02, 0x5A,
    0xE3, 0x5A, 0xEE, 0xE3, 0xEB, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0x06, 0x65, 0xEE, 0xE7,
    0xFA, 0xE8, 0xEF, 0x75, 0x80, 0x30, 0x25, 0x69, 0x02, 0x5A, 0xFD, 0x5B, 0x0F, 0xE4, 0xE5, 0xEF,
    0xE7, 0xF2, 0xE1, 0xF0, 0xE8, 0xE9, 0xE3, 0xF0, 0xE1, 0xF2, 0xE5, 0x6E, 0x80, 0x32, 0x24, 0xEE,
    0xE6, 0xE5, 0xF2, 0xE9, 0xEF, 0x72, 0x80, 0x20, 0x85, 0xED, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1,
    0xE3, 0x65, 0x80, 0xFF, 0x15, 0xEF, 0xEC, 0xE4, 0xF3, 0xF4, 0xF9, 0xEC, 0x65, 0x80, 0xF7, 0x35,
    0x70, 0x02, 0x5B, 0x36, 0x5B, 0x3D, 0xE1, 0xF2, 0xE5, 0x6E, 0x80, 0x24, 0x78, 0xE5, 0x72, 0x02,
    0x5B, 0x44, 0x5B, 0x4A, 0xE9, 0xEF, 0x64, 0x80, 0x24, 0x8C, 0xF3, 0xE9, 0xE1, 0x6E, 0x80, 0x06,
    0xF5, 0xF2, 0xEF, 0xED, 0xE1, 0x6E, 0x80, 0x21, 0x74, 0xF3, 0xF5, 0xF0, 0xE5, 0xF2, 0xE9, 0xEF,
    0x72, 0x80, 0x20, 0x75, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x55, 0x6C, 0x81, 0xFB, 0x02, 0x5B,
    0x71, 0xEF, 0xF2, 0xE9, 0x6E, 0x80, 0x01, 0x92, 0x6D, 0x02, 0x5B, 0x7E, 0x5B, 0x89, 0xEF, 0xEE,
    0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80, 0xFF, 0x46, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80,
    0x33, 0x99, 0x6F, 0x04, 0x5B, 0x9C, 0x5B, 0xB2, 0x5B, 0xBE, 0x5B, 0xC5, 0xE6, 0x61, 0x02, 0x5B,
    0xA3, 0x5B, 0xAB, 0xEE, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x1F, 0xF4, 0xE8, 0xE1, 0x69, 0x80,
    0x0E, 0x1D, 0xEE, 0xE7, 0xED, 0xE1, 0xEE, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x4F, 0xF2, 0xE1,
    0xEC, 0x6C, 0x80, 0x22, 0x00, 0xF5, 0x72, 0x8E, 0x00, 0x34, 0x5B, 0xE6, 0x5B, 0xEF, 0x5B, 0xF9,
    0x5C, 0x17, 0x5C, 0x1E, 0x5C, 0x37, 0x5C, 0x52, 0x5C, 0x74, 0x5C, 0x80, 0x5C, 0x93, 0x5C, 0x9E,
    0x5C, 0xBF, 0x5C, 0xC7, 0x5C, 0xD2, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0x06, 0x64, 0xE2,
    0xE5, 0xEE, 0xE7, 0xE1, 0xEC, 0x69, 0x80, 0x09, 0xEA, 0xE3, 0xE9, 0xF2, 0xE3, 0xEC, 0x65, 0x81,
    0x24, 0x63, 0x5C, 0x04, 0xE9, 0xEE, 0xF6, 0xE5, 0xF2, 0xF3, 0xE5, 0xF3, 0xE1, 0xEE, 0xF3, 0xF3,
    0xE5, 0xF2, 0xE9, 0x66, 0x80, 0x27, 0x8D, 0xE4, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x6A, 0xE7, 0x75,
    0x02, 0x5C, 0x25, 0x5C, 0x2E, 0xEA, 0xE1, 0xF2, 0xE1, 0xF4, 0x69, 0x80, 0x0A, 0xEA, 0xF2, 0xED,
    0xF5, 0xEB, 0xE8, 0x69, 0x80, 0x0A, 0x6A, 0xE8, 0x61, 0x02, 0x5C, 0x3E, 0x5C, 0x49, 0xE3, 0xEB,
    0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0x06, 0x64, 0xEE, 0xE7, 0xFA, 0xE8, 0xEF, 0x75, 0x80,
    0x30, 0x24, 0x69, 0x02, 0x5C, 0x58, 0x5C, 0x6A, 0xE4, 0xE5, 0xEF, 0xE7, 0xF2, 0xE1, 0xF0, 0xE8,
    0xE9, 0xE3, 0xF0, 0xE1, 0xF2, 0xE5, 0x6E, 0x80, 0x32, 0x23, 0xEE, 0xE6, 0xE5, 0xF2, 0xE9, 0xEF,
    0x72, 0x80, 0x20, 0x84, 0xED, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80, 0xFF, 0x14,
    0xEE, 0xF5, 0xED, 0xE5, 0xF2, 0xE1, 0xF4, 0xEF, 0xF2, 0xE2, 0xE5, 0xEE, 0xE7, 0xE1, 0xEC, 0x69,
    0x80, 0x09, 0xF7, 0xEF, 0xEC, 0xE4, 0xF3, 0xF4, 0xF9, 0xEC, 0x65, 0x80, 0xF7, 0x34, 0x70, 0x02,
    0x5C, 0xA4, 0x5C, 0xAB, 0xE1, 0xF2, 0xE5, 0x6E, 0x80, 0x24, 0x77, 0xE5, 0x72, 0x02, 0x5C, 0xB2,
    0x5C, 0xB8, 0xE9, 0xEF, 0x64, 0x80, 0x24, 0x8B, 0xF3, 0xE9, 0xE1, 0x6E, 0x80, 0x06, 0xF4, 0xF2,
    0xEF, 0xED, 0xE1, 0x6E, 0x80, 0x21, 0x73, 0xF3, 0xF5, 0xF0, 0xE5, 0xF2, 0xE9, 0xEF, 0x72, 0x80,
    0x20, 0x74, 0x74, 0x02, 0x5C, 0xD8, 0x5C, 0xFE, 0xE5, 0xE5, 0x6E, 0x02, 0x5C, 0xE0, 0x5C, 0xE9,
    0xE3, 0xE9, 0xF2, 0xE3, 0xEC, 0x65, 0x80, 0x24, 0x6D, 0x70, 0x02, 0x5C, 0xEF, 0x5C, 0xF6, 0xE1,
    0xF2, 0xE5, 0x6E, 0x80, 0x24, 0x81, 0xE5, 0xF2, 0xE9, 0xEF, 0x64, 0x80, 0x24, 0x95, 0x68, 0x02,
    0x5D, 0x04, 0x5D, 0x09, 0xE1, 0x69, 0x80, 0x0E, 0x54, 0xF4, 0xEF, 0xEE, 0xE5, 0xE3, 0xE8, 0xE9,
    0xEE, 0xE5, 0xF3, 0x65, 0x80, 0x02, 0xCB, 0xF0, 0xE1, 0xF2, 0xE5, 0x6E, 0x80, 0x24, 0xA1, 0xF2,
    0x61, 0x02, 0x5D, 0x26, 0x5D, 0x2E, 0xE3, 0xF4, 0xE9, 0xEF, 0x6E, 0x80, 0x20, 0x44, 0xEE, 0x63,
    0x80, 0x20, 0xA3, 0x67, 0x90, 0x00, 0x67, 0x5D, 0x57, 0x5E, 0x21, 0x5E, 0x38, 0x5E, 0x75, 0x5E,
    0x86, 0x5F, 0x37, 0x60, 0x30, 0x60, 0x85, 0x60, 0x92, 0x61, 0x04, 0x61, 0x1D, 0x61, 0x39, 0x61,
    0x4F, 0x62, 0x18, 0x62, 0x2E, 0x62, 0x94, 0x61, 0x09, 0x5D, 0x6B, 0x5D, 0x75, 0x5D, 0x7C, 0x5D,
    0x83, 0x5D, 0xC3, 0x5D, 0xDC, 0x5D, 0xE7, 0x5D, 0xF2, 0x5E, 0x14, 0xE2, 0xE5, 0xEE, 0xE7, 0xE1,
    0xEC, 0x69, 0x80, 0x09, 0x97, 0xE3, 0xF5, 0xF4, 0x65, 0x80, 0x01, 0xF5, 0xE4, 0xE5, 0xF6, 0x61,
    0x80, 0x09, 0x17, 0x66, 0x04, 0x5D, 0x8D, 0x5D, 0x96, 0x5D, 0xA4, 0x5D, 0xB4, 0xE1, 0xF2, 0xE1,
    0xE2, 0xE9, 0x63, 0x80, 0x06, 0xAF, 0xE6, 0xE9, 0xEE, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9,
    0x63, 0x80, 0xFB, 0x93, 0xE9, 0xEE, 0xE9, 0xF4, 0xE9, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9,
    0x63, 0x80, 0xFB, 0x94, 0xED, 0xE5, 0xE4, 0xE9, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63,
    0x80, 0xFB, 0x95, 0xE7, 0x75, 0x02, 0x5D, 0xCA, 0x5D, 0xD3, 0xEA, 0xE1, 0xF2, 0xE1, 0xF4, 0x69,
    0x80, 0x0A, 0x97, 0xF2, 0xED, 0xF5, 0xEB, 0xE8, 0x69, 0x80, 0x0A, 0x17, 0xE8, 0xE9, 0xF2, 0xE1,
    0xE7, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0x4C, 0xEB, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1, 0xEE, 0x61, 0x80,
    0x30, 0xAC, 0xED, 0xED, 0x61, 0x82, 0x03, 0xB3, 0x5D, 0xFC, 0x5E, 0x09, 0xEC, 0xE1, 0xF4, 0xE9,
    0xEE, 0xF3, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0x02, 0x63, 0xF3, 0xF5, 0xF0, 0xE5, 0xF2, 0xE9, 0xEF,
    0x72, 0x80, 0x02, 0xE0, 0xEE, 0xE7, 0xE9, 0xE1, 0xE3, 0xEF, 0xF0, 0xF4, 0xE9, 0x63, 0x80, 0x03,
    0xEB, 0x62, 0x02, 0x5E, 0x27, 0x5E, 0x31, 0xEF, 0xF0, 0xEF, 0xED, 0xEF, 0xE6, 0x6F, 0x80, 0x31,
    0x0D, 0xF2, 0xE5, 0xF6, 0x65, 0x80, 0x01, 0x1F, 0x63, 0x04, 0x5E, 0x42, 0x5E, 0x49, 0x5E, 0x52,
    0x5E, 0x68, 0xE1, 0xF2, 0xEF, 0x6E, 0x80, 0x01, 0xE7, 0xE5, 0xE4, 0xE9, 0xEC, 0xEC, 0x61, 0x80,
    0x01, 0x23, 0xE9, 0xF2, 0x63, 0x02, 0x5E, 0x5A, 0x5E, 0x5F, 0xEC, 0x65, 0x80, 0x24, 0xD6, 0xF5,
    0xED, 0xE6, 0xEC, 0xE5, 0x78, 0x80, 0x01, 0x1D, 0xEF, 0xED, 0xED, 0xE1, 0xE1, 0xE3, 0xE3, 0xE5,
    0xEE, 0x74, 0x80, 0x01, 0x23, 0xE4, 0xEF, 0x74, 0x81, 0x01, 0x21, 0x5E, 0x7D, 0xE1, 0xE3, 0xE3,
    0xE5, 0xEE, 0x74, 0x80, 0x01, 0x21, 0x65, 0x06, 0x5E, 0x94, 0x5E, 0x9F, 0x5E, 0xAA, 0x5E, 0xB5,
    0x5E, 0xC8, 0x5F, 0x2E, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x33, 0xE8,
    0xE9, 0xF2, 0xE1, 0xE7, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0x52, 0xEB, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1,
    0xEE, 0x61, 0x80, 0x30, 0xB2, 0xEF, 0xED, 0xE5, 0xF4, 0xF2, 0xE9, 0xE3, 0xE1, 0xEC, 0xEC, 0xF9,
    0xE5, 0xF1, 0xF5, 0xE1, 0x6C, 0x80, 0x22, 0x51, 0x72, 0x03, 0x5E, 0xD0, 0x5F, 0x01, 0x5F, 0x0B,
    0xE5, 0xF3, 0x68, 0x03, 0x5E, 0xDA, 0x5E, 0xE9, 0x5E, 0xF2, 0xE1, 0xE3, 0xE3, 0xE5, 0xEE, 0xF4,
    0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0x9C, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80,
    0x05, 0xF3, 0xED, 0xF5, 0xF1, 0xE4, 0xE1, 0xED, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05,
    0x9D, 0xED, 0xE1, 0xEE, 0xE4, 0xE2, 0xEC, 0x73, 0x80, 0x00, 0xDF, 0xF3, 0xE8, 0xE1, 0xF9, 0xE9,
    0x6D, 0x02, 0x5F, 0x16, 0x5F, 0x25, 0xE1, 0xE3, 0xE3, 0xE5, 0xEE, 0xF4, 0xE8, 0xE5, 0xE2, 0xF2,
    0xE5, 0x77, 0x80, 0x05, 0x9E, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xF4, 0xF4, 0xE1,
    0xED, 0xE1, 0xF2, 0x6B, 0x80, 0x30, 0x13, 0x68, 0x05, 0x5F, 0x43, 0x5F, 0xC8, 0x60, 0x07, 0x60,
    0x20, 0x60, 0x26, 0x61, 0x04, 0x5F, 0x4D, 0x5F, 0x57, 0x5F, 0x6E, 0x5F, 0x87, 0xE2, 0xE5, 0xEE,
    0xE7, 0xE1, 0xEC, 0x69, 0x80, 0x09, 0x98, 0x64, 0x02, 0x5F, 0x5D, 0x5F, 0x68, 0xE1, 0xF2, 0xED,
    0xE5, 0xEE, 0xE9, 0xE1, 0x6E, 0x80, 0x05, 0x72, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x18, 0xE7, 0x75,
    0x02, 0x5F, 0x75, 0x5F, 0x7E, 0xEA, 0xE1, 0xF2, 0xE1, 0xF4, 0x69, 0x80, 0x0A, 0x98, 0xF2, 0xED,
    0xF5, 0xEB, 0xE8, 0x69, 0x80, 0x0A, 0x18, 0xE9, 0x6E, 0x04, 0x5F, 0x92, 0x5F, 0x9B, 0x5F, 0xA9,
    0x5F, 0xB9, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0x06, 0x3A, 0xE6, 0xE9, 0xEE, 0xE1, 0xEC,
    0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE, 0xCE, 0xE9, 0xEE, 0xE9, 0xF4, 0xE9, 0xE1, 0xEC,
    0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE, 0xCF, 0xED, 0xE5, 0xE4, 0xE9, 0xE1, 0xEC, 0xE1,
    0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE, 0xD0, 0x65, 0x03, 0x5F, 0xD0, 0x5F, 0xE5, 0x5F, 0xF6,
    0xED, 0xE9, 0xE4, 0xE4, 0xEC, 0xE5, 0xE8, 0xEF, 0xEF, 0xEB, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC,
    0xE9, 0x63, 0x80, 0x04, 0x95, 0xF3, 0xF4, 0xF2, 0xEF, 0xEB, 0xE5, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC,
    0xEC, 0xE9, 0x63, 0x80, 0x04, 0x93, 0xF5, 0xF0, 0xF4, 0xF5, 0xF2, 0xEE, 0xE3, 0xF9, 0xF2, 0xE9,
    0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x91, 0xE8, 0x61, 0x02, 0x60, 0x0E, 0x60, 0x15, 0xE4, 0xE5,
    0xF6, 0x61, 0x80, 0x09, 0x5A, 0xE7, 0xF5, 0xF2, 0xED, 0xF5, 0xEB, 0xE8, 0x69, 0x80, 0x0A, 0x5A,
    0xEF, 0xEF, 0x6B, 0x80, 0x02, 0x60, 0xFA, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0x93,
    0x69, 0x03, 0x60, 0x38, 0x60, 0x43, 0x60, 0x4E, 0xE8, 0xE9, 0xF2, 0xE1, 0xE7, 0xE1, 0xEE, 0x61,
    0x80, 0x30, 0x4E, 0xEB, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0xAE, 0x6D, 0x02,
    0x60, 0x54, 0x60, 0x5F, 0xE1, 0xF2, 0xED, 0xE5, 0xEE, 0xE9, 0xE1, 0x6E, 0x80, 0x05, 0x63, 0xE5,
    0x6C, 0x82, 0x05, 0xD2, 0x60, 0x68, 0x60, 0x7C, 0xE4, 0xE1, 0xE7, 0xE5, 0xF3, 0x68, 0x81, 0xFB,
    0x32, 0x60, 0x73, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0xFB, 0x32, 0xE8, 0xE5, 0xE2, 0xF2,
    0xE5, 0x77, 0x80, 0x05, 0xD2, 0xEA, 0xE5, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80,
    0x04, 0x53, 0xEC, 0xEF, 0xF4, 0xF4, 0xE1, 0x6C, 0x02, 0x60, 0x9D, 0x60, 0xAE, 0xE9, 0xEE, 0xF6,
    0xE5, 0xF2, 0xF4, 0xE5, 0xE4, 0xF3, 0xF4, 0xF2, 0xEF, 0xEB, 0x65, 0x80, 0x01, 0xBE, 0xF3, 0xF4,
    0xEF, 0x70, 0x84, 0x02, 0x94, 0x60, 0xBD, 0x60, 0xC8, 0x60, 0xCE, 0x60, 0xEE, 0xE9, 0xEE, 0xF6,
    0xE5, 0xF2, 0xF4, 0xE5, 0x64, 0x80, 0x02, 0x96, 0xED, 0xEF, 0x64, 0x80, 0x02, 0xC0, 0xF2, 0xE5,
    0xF6, 0xE5, 0xF2, 0xF3, 0xE5, 0x64, 0x82, 0x02, 0x95, 0x60, 0xDD, 0x60, 0xE3, 0xED, 0xEF, 0x64,
    0x80, 0x02, 0xC1, 0xF3, 0xF5, 0xF0, 0xE5, 0xF2, 0xE9, 0xEF, 0x72, 0x80, 0x02, 0xE4, 0xF3, 0xF4,
    0xF2, 0xEF, 0xEB, 0x65, 0x81, 0x02, 0xA1, 0x60, 0xF9, 0xF2, 0xE5, 0xF6, 0xE5, 0xF2, 0xF3, 0xE5,
    0x64, 0x80, 0x02, 0xA2, 0x6D, 0x02, 0x61, 0x0A, 0x61, 0x12, 0xE1, 0xE3, 0xF2, 0xEF, 0x6E, 0x80,
    0x1E, 0x21, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80, 0xFF, 0x47, 0x6F, 0x02, 0x61,
    0x23, 0x61, 0x2E, 0xE8, 0xE9, 0xF2, 0xE1, 0xE7, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0x54, 0xEB, 0xE1,
    0xF4, 0xE1, 0xEB, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0xB4, 0xF0, 0x61, 0x02, 0x61, 0x40, 0x61, 0x46,
    0xF2, 0xE5, 0x6E, 0x80, 0x24, 0xA2, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0xAC, 0x72,
    0x02, 0x61, 0x55, 0x61, 0xB6, 0x61, 0x02, 0x61, 0x5B, 0x61, 0x63, 0xE4, 0xE9, 0xE5, 0xEE, 0x74,
    0x80, 0x22, 0x07, 0xF6, 0x65, 0x86, 0x00, 0x60, 0x61, 0x74, 0x61, 0x7F, 0x61, 0x90, 0x61, 0x97,
    0x61, 0xA0, 0x61, 0xAC, 0xE2, 0xE5, 0xEC, 0xEF, 0xF7, 0xE3, 0xED, 0x62, 0x80, 0x03, 0x16, 0x63,
    0x02, 0x61, 0x85, 0x61, 0x8A, 0xED, 0x62, 0x80, 0x03, 0x00, 0xEF, 0xED, 0x62, 0x80, 0x03, 0x00,
    0xE4, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x53, 0xEC, 0xEF, 0xF7, 0xED, 0xEF, 0x64, 0x80, 0x02, 0xCE,
    0xED, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80, 0xFF, 0x40, 0xF4, 0xEF, 0xEE, 0xE5,
    0xE3, 0xED, 0x62, 0x80, 0x03, 0x40, 0xE5, 0xE1, 0xF4, 0xE5, 0x72, 0x84, 0x00, 0x3E, 0x61, 0xC6,
    0x61, 0xD9, 0x61, 0xE5, 0x62, 0x10, 0xE5, 0xF1, 0xF5, 0xE1, 0x6C, 0x81, 0x22, 0x65, 0x61, 0xD0,
    0xEF, 0xF2, 0xEC, 0xE5, 0xF3, 0x73, 0x80, 0x22, 0xDB, 0xED, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1,
    0xE3, 0x65, 0x80, 0xFF, 0x1E, 0x6F, 0x02, 0x61, 0xEB, 0x62, 0x05, 0x72, 0x02, 0x61, 0xF1, 0x61,
    0xFE, 0xE5, 0xF1, 0xF5, 0xE9, 0xF6, 0xE1, 0xEC, 0xE5, 0xEE, 0x74, 0x80, 0x22, 0x73, 0xEC, 0xE5,
    0xF3, 0x73, 0x80, 0x22, 0x77, 0xF6, 0xE5, 0xF2, 0xE5, 0xF1, 0xF5, 0xE1, 0x6C, 0x80, 0x22, 0x67,
    0xF3, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xFE, 0x65, 0x73, 0x02, 0x62, 0x1E, 0x62, 0x26, 0xE3, 0xF2,
    0xE9, 0xF0, 0x74, 0x80, 0x02, 0x61, 0xF4, 0xF2, 0xEF, 0xEB, 0x65, 0x80, 0x01, 0xE5, 0x75, 0x04,
    0x62, 0x38, 0x62, 0x43, 0x62, 0x7C, 0x62, 0x87, 0xE8, 0xE9, 0xF2, 0xE1, 0xE7, 0xE1, 0xEE, 0x61,
    0x80, 0x30, 0x50, 0xE9, 0x6C, 0x02, 0x62, 0x4A, 0x62, 0x63, 0xEC, 0xE5, 0xED, 0xEF, 0x74, 0x02,
    0x62, 0x54, 0x62, 0x5B, 0xEC, 0xE5, 0xE6, 0x74, 0x80, 0x00, 0xAB, 0xF2, 0xE9, 0xE7, 0xE8, 0x74,
    0x80, 0x00, 0xBB, 0xF3, 0xE9, 0xEE, 0xE7, 0x6C, 0x02, 0x62, 0x6D, 0x62, 0x74, 0xEC, 0xE5, 0xE6,
    0x74, 0x80, 0x20, 0x39, 0xF2, 0xE9, 0xE7, 0xE8, 0x74, 0x80, 0x20, 0x3A, 0xEB, 0xE1, 0xF4, 0xE1,
    0xEB, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0xB0, 0xF2, 0xE1, 0xED, 0xF5, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2,
    0x65, 0x80, 0x33, 0x18, 0xF9, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0xC9, 0x68, 0x90,
    0x00, 0x68, 0x62, 0xC2, 0x65, 0x50, 0x65, 0x73, 0x65, 0x98, 0x65, 0xC0, 0x67, 0x50, 0x67, 0x64,
    0x68, 0x41, 0x68, 0x4D, 0x68, 0x59, 0x69, 0x9D, 0x69, 0xA5, 0x69, 0xB0, 0x69, 0xB9, 0x6A, 0x09,
    0x6A, 0x0D, 0x61, 0x0D, 0x62, 0xDE, 0x63, 0x05, 0x63, 0x0F, 0x63, 0x2D, 0x63, 0x46, 0x63, 0x94,
    0x63, 0xA0, 0x63, 0xB9, 0x63, 0xC8, 0x63, 0xE5, 0x63, 0xF2, 0x64, 0x2C, 0x64, 0x35, 0x61, 0x02,
    0x62, 0xE4, 0x62, 0xF7, 0xE2, 0xEB, 0xE8, 0xE1, 0xF3, 0xE9, 0xE1, 0xEE, 0xE3, 0xF9, 0xF2, 0xE9,
    0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0xA9, 0xEC, 0xF4, 0xEF, 0xEE, 0xE5, 0xE1, 0xF2, 0xE1, 0xE2,
    0xE9, 0x63, 0x80, 0x06, 0xC1, 0xE2, 0xE5, 0xEE, 0xE7, 0xE1, 0xEC, 0x69, 0x80, 0x09, 0xB9, 0xE4,
    0x65, 0x02, 0x63, 0x16, 0x63, 0x28, 0xF3, 0xE3, 0xE5, 0xEE, 0xE4, 0xE5, 0xF2, 0xE3, 0xF9, 0xF2,
    0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0xB3, 0xF6, 0x61, 0x80, 0x09, 0x39, 0xE7, 0x75, 0x02,
    0x63, 0x34, 0x63, 0x3D, 0xEA, 0xE1, 0xF2, 0xE1, 0xF4, 0x69, 0x80, 0x0A, 0xB9, 0xF2, 0xED, 0xF5,
    0xEB, 0xE8, 0x69, 0x80, 0x0A, 0x39, 0x68, 0x04, 0x63, 0x50, 0x63, 0x59, 0x63, 0x67, 0x63, 0x85,
    0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0x06, 0x2D, 0xE6, 0xE9, 0xEE, 0xE1, 0xEC, 0xE1, 0xF2,
    0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE, 0xA2, 0x69, 0x02, 0x63, 0x6D, 0x63, 0x7C, 0xEE, 0xE9, 0xF4,
    0xE9, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE, 0xA3, 0xF2, 0xE1, 0xE7, 0xE1,
    0xEE, 0x61, 0x80, 0x30, 0x6F, 0xED, 0xE5, 0xE4, 0xE9, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9,
    0x63, 0x80, 0xFE, 0xA4, 0xE9, 0xF4, 0xF5, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0x2A,
    0xEB, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1, 0xEE, 0x61, 0x81, 0x30, 0xCF, 0x63, 0xAD, 0xE8, 0xE1, 0xEC,
    0xE6, 0xF7, 0xE9, 0xE4, 0xF4, 0x68, 0x80, 0xFF, 0x8A, 0xEC, 0xE1, 0xEE, 0xF4, 0xE7, 0xF5, 0xF2,
    0xED, 0xF5, 0xEB, 0xE8, 0x69, 0x80, 0x0A, 0x4D, 0xED, 0xFA, 0x61, 0x02, 0x63, 0xD0, 0x63, 0xD9,
    0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0x06, 0x21, 0xEC, 0xEF, 0xF7, 0xE1, 0xF2, 0xE1, 0xE2,
    0xE9, 0x63, 0x80, 0x06, 0x21, 0xEE, 0xE7, 0xF5, 0xEC, 0xE6, 0xE9, 0xEC, 0xEC, 0xE5, 0x72, 0x80,
    0x31, 0x64, 0x72, 0x02, 0x63, 0xF8, 0x64, 0x08, 0xE4, 0xF3, 0xE9, 0xE7, 0xEE, 0xE3, 0xF9, 0xF2,
    0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x4A, 0xF0, 0xEF, 0xEF, 0x6E, 0x02, 0x64, 0x11, 0x64,
    0x1E, 0xEC, 0xE5, 0xE6, 0xF4, 0xE2, 0xE1, 0xF2, 0xE2, 0xF5, 0x70, 0x80, 0x21, 0xBC, 0xF2, 0xE9,
    0xE7, 0xE8, 0xF4, 0xE2, 0xE1, 0xF2, 0xE2, 0xF5, 0x70, 0x80, 0x21, 0xC0, 0xF3, 0xF1, 0xF5, 0xE1,
    0xF2, 0x65, 0x80, 0x33, 0xCA, 0xF4, 0xE1, 0x66, 0x03, 0x64, 0x3F, 0x64, 0x9B, 0x64, 0xF6, 0xF0,
    0xE1, 0xF4, 0xE1, 0x68, 0x86, 0x05, 0xB2, 0x64, 0x53, 0x64, 0x58, 0x64, 0x66, 0x64, 0x6F, 0x64,
    0x7E, 0x64, 0x8E, 0xB1, 0x36, 0x80, 0x05, 0xB2, 0x32, 0x02, 0x64, 0x5E, 0x64, 0x62, 0x33, 0x80,
    0x05, 0xB2, 0x66, 0x80, 0x05, 0xB2, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xB2, 0xEE,
    0xE1, 0xF2, 0xF2, 0xEF, 0xF7, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xB2, 0xF1, 0xF5,
    0xE1, 0xF2, 0xF4, 0xE5, 0xF2, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xB2, 0xF7, 0xE9,
    0xE4, 0xE5, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xB2, 0xF1, 0xE1, 0xED, 0xE1, 0xF4,
    0x73, 0x87, 0x05, 0xB3, 0x64, 0xB2, 0x64, 0xB7, 0x64, 0xBC, 0x64, 0xC1, 0x64, 0xCA, 0x64, 0xD9,
    0x64, 0xE9, 0xB1, 0x62, 0x80, 0x05, 0xB3, 0xB2, 0x38, 0x80, 0x05, 0xB3, 0xB3, 0x34, 0x80, 0x05,
    0xB3, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xB3, 0xEE, 0xE1, 0xF2, 0xF2, 0xEF, 0xF7,
    0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xB3, 0xF1, 0xF5, 0xE1, 0xF2, 0xF4, 0xE5, 0xF2,
    0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xB3, 0xF7, 0xE9, 0xE4, 0xE5, 0xE8, 0xE5, 0xE2,
    0xF2, 0xE5, 0x77, 0x80, 0x05, 0xB3, 0xF3, 0xE5, 0xE7, 0xEF, 0x6C, 0x87, 0x05, 0xB1, 0x65, 0x0C,
    0x65, 0x11, 0x65, 0x16, 0x65, 0x1B, 0x65, 0x24, 0x65, 0x33, 0x65, 0x43, 0xB1, 0x37, 0x80, 0x05,
    0xB1, 0xB2, 0x34, 0x80, 0x05, 0xB1, 0xB3, 0x30, 0x80, 0x05, 0xB1, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5,
    0x77, 0x80, 0x05, 0xB1, 0xEE, 0xE1, 0xF2, 0xF2, 0xEF, 0xF7, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77,
    0x80, 0x05, 0xB1, 0xF1, 0xF5, 0xE1, 0xF2, 0xF4, 0xE5, 0xF2, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77,
    0x80, 0x05, 0xB1, 0xF7, 0xE9, 0xE4, 0xE5, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xB1,
    0x62, 0x03, 0x65, 0x58, 0x65, 0x5D, 0x65, 0x67, 0xE1, 0x72, 0x80, 0x01, 0x27, 0xEF, 0xF0, 0xEF,
    0xED, 0xEF, 0xE6, 0x6F, 0x80, 0x31, 0x0F, 0xF2, 0xE5, 0xF6, 0xE5, 0xE2, 0xE5, 0xEC, 0xEF, 0x77,
    0x80, 0x1E, 0x2B, 0x63, 0x02, 0x65, 0x79, 0x65, 0x82, 0xE5, 0xE4, 0xE9, 0xEC, 0xEC, 0x61, 0x80,
    0x1E, 0x29, 0xE9, 0xF2, 0x63, 0x02, 0x65, 0x8A, 0x65, 0x8F, 0xEC, 0x65, 0x80, 0x24, 0xD7, 0xF5,
    0xED, 0xE6, 0xEC, 0xE5, 0x78, 0x80, 0x01, 0x25, 0x64, 0x02, 0x65, 0x9E, 0x65, 0xA8, 0xE9, 0xE5,
    0xF2, 0xE5, 0xF3, 0xE9, 0x73, 0x80, 0x1E, 0x27, 0xEF, 0x74, 0x02, 0x65, 0xAF, 0x65, 0xB8, 0xE1,
    0xE3, 0xE3, 0xE5, 0xEE, 0x74, 0x80, 0x1E, 0x23, 0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E, 0x25,
    0x65, 0x88, 0x05, 0xD4, 0x65, 0xD4, 0x65, 0xF5, 0x66, 0x09, 0x66, 0xEE, 0x66, 0xFE, 0x67, 0x2B,
    0x67, 0x34, 0x67, 0x41, 0xE1, 0xF2, 0x74, 0x81, 0x26, 0x65, 0x65, 0xDC, 0xF3, 0xF5, 0xE9, 0x74,
    0x02, 0x65, 0xE5, 0x65, 0xED, 0xE2, 0xEC, 0xE1, 0xE3, 0x6B, 0x80, 0x26, 0x65, 0xF7, 0xE8, 0xE9,
    0xF4, 0x65, 0x80, 0x26, 0x61, 0xE4, 0xE1, 0xE7, 0xE5, 0xF3, 0x68, 0x81, 0xFB, 0x34, 0x66, 0x00,
    0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0xFB, 0x34, 0x68, 0x06, 0x66, 0x17, 0x66, 0x33, 0x66,
    0x3B, 0x66, 0x6D, 0x66, 0x9B, 0x66, 0xCC, 0x61, 0x02, 0x66, 0x1D, 0x66, 0x2B, 0xEC, 0xF4, 0xEF,
    0xEE, 0xE5, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0x06, 0xC1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63,
    0x80, 0x06, 0x47, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xD4, 0xE6, 0xE9, 0xEE, 0xE1, 0xEC,
    0x61, 0x02, 0x66, 0x46, 0x66, 0x65, 0xEC, 0x74, 0x02, 0x66, 0x4D, 0x66, 0x59, 0xEF, 0xEE, 0xE5,
    0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFB, 0xA7, 0xF4, 0xF7, 0xEF, 0xE1, 0xF2, 0xE1, 0xE2,
    0xE9, 0x63, 0x80, 0xFE, 0xEA, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE, 0xEA, 0xE8, 0xE1, 0xED,
    0xFA, 0xE1, 0xE1, 0xE2, 0xEF, 0xF6, 0x65, 0x02, 0x66, 0x7C, 0x66, 0x8A, 0xE6, 0xE9, 0xEE, 0xE1,
    0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFB, 0xA5, 0xE9, 0xF3, 0xEF, 0xEC, 0xE1, 0xF4,
    0xE5, 0xE4, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFB, 0xA4, 0x69, 0x02, 0x66, 0xA1, 0x66,
    0xC3, 0xEE, 0xE9, 0xF4, 0xE9, 0xE1, 0xEC, 0x61, 0x02, 0x66, 0xAD, 0x66, 0xBB, 0xEC, 0xF4, 0xEF,
    0xEE, 0xE5, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFB, 0xA8, 0xF2, 0xE1, 0xE2, 0xE9, 0x63,
    0x80, 0xFE, 0xEB, 0xF2, 0xE1, 0xE7, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0x78, 0xED, 0xE5, 0xE4, 0xE9,
    0xE1, 0xEC, 0x61, 0x02, 0x66, 0xD8, 0x66, 0xE6, 0xEC, 0xF4, 0xEF, 0xEE, 0xE5, 0xE1, 0xF2, 0xE1,
    0xE2, 0xE9, 0x63, 0x80, 0xFB, 0xA9, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE, 0xEC, 0xE9, 0xF3,
    0xE5, 0xE9, 0xE5, 0xF2, 0xE1, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0x7B, 0x6B, 0x02,
    0x67, 0x04, 0x67, 0x1C, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1, 0xEE, 0x61, 0x81, 0x30, 0xD8, 0x67, 0x10,
    0xE8, 0xE1, 0xEC, 0xE6, 0xF7, 0xE9, 0xE4, 0xF4, 0x68, 0x80, 0xFF, 0x8D, 0xF5, 0xF4, 0xE1, 0xE1,
    0xF2, 0xF5, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0x36, 0xEE, 0xE7, 0xE8, 0xEF, 0xEF,
    0x6B, 0x80, 0x02, 0x67, 0xF2, 0xF5, 0xF4, 0xF5, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33,
    0x39, 0x74, 0x81, 0x05, 0xD7, 0x67, 0x47, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xD7,
    0xE8, 0xEF, 0xEF, 0x6B, 0x81, 0x02, 0x66, 0x67, 0x59, 0xF3, 0xF5, 0xF0, 0xE5, 0xF2, 0xE9, 0xEF,
    0x72, 0x80, 0x02, 0xB1, 0x69, 0x04, 0x67, 0x6E, 0x67, 0xC3, 0x67, 0xCE, 0x67, 0xE7, 0xE5, 0xF5,
    0x68, 0x04, 0x67, 0x7A, 0x67, 0x9D, 0x67, 0xAC, 0x67, 0xB5, 0x61, 0x02, 0x67, 0x80, 0x67, 0x8F,
    0xE3, 0xE9, 0xF2, 0xE3, 0xEC, 0xE5, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x32, 0x7B, 0xF0,
    0xE1, 0xF2, 0xE5, 0xEE, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x32, 0x1B, 0xE3, 0xE9, 0xF2,
    0xE3, 0xEC, 0xE5, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x32, 0x6D, 0xEB, 0xEF, 0xF2, 0xE5,
    0xE1, 0x6E, 0x80, 0x31, 0x4E, 0xF0, 0xE1, 0xF2, 0xE5, 0xEE, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E,
    0x80, 0x32, 0x0D, 0xE8, 0xE9, 0xF2, 0xE1, 0xE7, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0x72, 0xEB, 0xE1,
    0xF4, 0xE1, 0xEB, 0xE1, 0xEE, 0x61, 0x81, 0x30, 0xD2, 0x67, 0xDB, 0xE8, 0xE1, 0xEC, 0xE6, 0xF7,
    0xE9, 0xE4, 0xF4, 0x68, 0x80, 0xFF, 0x8B, 0xF2, 0xE9, 0x71, 0x86, 0x05, 0xB4, 0x67, 0xF9, 0x67,
    0xFE, 0x68, 0x0C, 0x68, 0x15, 0x68, 0x24, 0x68, 0x34, 0xB1, 0x34, 0x80, 0x05, 0xB4, 0x32, 0x02,
    0x68, 0x04, 0x68, 0x08, 0x31, 0x80, 0x05, 0xB4, 0x64, 0x80, 0x05, 0xB4, 0xE8, 0xE5, 0xE2, 0xF2,
    0xE5, 0x77, 0x80, 0x05, 0xB4, 0xEE, 0xE1, 0xF2, 0xF2, 0xEF, 0xF7, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5,
    0x77, 0x80, 0x05, 0xB4, 0xF1, 0xF5, 0xE1, 0xF2, 0xF4, 0xE5, 0xF2, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5,
    0x77, 0x80, 0x05, 0xB4, 0xF7, 0xE9, 0xE4, 0xE5, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05,
    0xB4, 0xEC, 0xE9, 0xEE, 0xE5, 0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E, 0x96, 0xED, 0xEF, 0xEE,
    0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80, 0xFF, 0x48, 0x6F, 0x09, 0x68, 0x6D, 0x68, 0x78, 0x68,
    0x90, 0x68, 0xA9, 0x69, 0x01, 0x69, 0x0E, 0x69, 0x64, 0x69, 0x8C, 0x69, 0x97, 0xE1, 0xF2, 0xED,
    0xE5, 0xEE, 0xE9, 0xE1, 0x6E, 0x80, 0x05, 0x70, 0xE8, 0x69, 0x02, 0x68, 0x7F, 0x68, 0x87, 0xF0,
    0xF4, 0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x2B, 0xF2, 0xE1, 0xE7, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0x7B,
    0xEB, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1, 0xEE, 0x61, 0x81, 0x30, 0xDB, 0x68, 0x9D, 0xE8, 0xE1, 0xEC,
    0xE6, 0xF7, 0xE9, 0xE4, 0xF4, 0x68, 0x80, 0xFF, 0x8E, 0xEC, 0xE1, 0x6D, 0x87, 0x05, 0xB9, 0x68,
    0xBD, 0x68, 0xC2, 0x68, 0xC7, 0x68, 0xCC, 0x68, 0xD5, 0x68, 0xE4, 0x68, 0xF4, 0xB1, 0x39, 0x80,
    0x05, 0xB9, 0xB2, 0x36, 0x80, 0x05, 0xB9, 0xB3, 0x32, 0x80, 0x05, 0xB9, 0xE8, 0xE5, 0xE2, 0xF2,
    0xE5, 0x77, 0x80, 0x05, 0xB9, 0xEE, 0xE1, 0xF2, 0xF2, 0xEF, 0xF7, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5,
    0x77, 0x80, 0x05, 0xB9, 0xF1, 0xF5, 0xE1, 0xF2, 0xF4, 0xE5, 0xF2, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5,
    0x77, 0x80, 0x05, 0xB9, 0xF7, 0xE9, 0xE4, 0xE5, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05,
    0xB9, 0xEE, 0xEF, 0xEB, 0xE8, 0xF5, 0xEB, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x2E, 0x6F, 0x02,
    0x69, 0x14, 0x69, 0x5A, 0x6B, 0x04, 0x69, 0x1E, 0x69, 0x2A, 0x69, 0x30, 0x69, 0x46, 0xE1, 0xE2,
    0xEF, 0xF6, 0xE5, 0xE3, 0xEF, 0xED, 0x62, 0x80, 0x03, 0x09, 0xE3, 0xED, 0x62, 0x80, 0x03, 0x09,
    0xF0, 0xE1, 0xEC, 0xE1, 0xF4, 0xE1, 0xEC, 0xE9, 0xFA, 0xE5, 0xE4, 0xE2, 0xE5, 0xEC, 0xEF, 0xF7,
    0xE3, 0xED, 0x62, 0x80, 0x03, 0x21, 0xF2, 0xE5, 0xF4, 0xF2, 0xEF, 0xE6, 0xEC, 0xE5, 0xF8, 0xE2,
    0xE5, 0xEC, 0xEF, 0xF7, 0xE3, 0xED, 0x62, 0x80, 0x03, 0x22, 0xEE, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2,
    0x65, 0x80, 0x33, 0x42, 0x72, 0x02, 0x69, 0x6A, 0x69, 0x85, 0x69, 0x02, 0x69, 0x70, 0x69, 0x79,
    0xE3, 0xEF, 0xF0, 0xF4, 0xE9, 0x63, 0x80, 0x03, 0xE9, 0xFA, 0xEF, 0xEE, 0xF4, 0xE1, 0xEC, 0xE2,
    0xE1, 0x72, 0x80, 0x20, 0x15, 0xEE, 0xE3, 0xED, 0x62, 0x80, 0x03, 0x1B, 0xF4, 0xF3, 0xF0, 0xF2,
    0xE9, 0xEE, 0xE7, 0x73, 0x80, 0x26, 0x68, 0xF5, 0xF3, 0x65, 0x80, 0x23, 0x02, 0xF0, 0xE1, 0xF2,
    0xE5, 0x6E, 0x80, 0x24, 0xA3, 0xF3, 0xF5, 0xF0, 0xE5, 0xF2, 0xE9, 0xEF, 0x72, 0x80, 0x02, 0xB0,
    0xF4, 0xF5, 0xF2, 0xEE, 0xE5, 0x64, 0x80, 0x02, 0x65, 0x75, 0x04, 0x69, 0xC3, 0x69, 0xCE, 0x69,
    0xDB, 0x69, 0xF4, 0xE8, 0xE9, 0xF2, 0xE1, 0xE7, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0x75, 0xE9, 0xE9,
    0xF4, 0xEF, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0x33, 0xEB, 0xE1, 0xF4, 0xE1, 0xEB,
    0xE1, 0xEE, 0x61, 0x81, 0x30, 0xD5, 0x69, 0xE8, 0xE8, 0xE1, 0xEC, 0xE6, 0xF7, 0xE9, 0xE4, 0xF4,
    0x68, 0x80, 0xFF, 0x8C, 0xEE, 0xE7, 0xE1, 0xF2, 0xF5, 0xED, 0xEC, 0xE1, 0xF5, 0x74, 0x81, 0x02,
    0xDD, 0x6A, 0x03, 0xE3, 0xED, 0x62, 0x80, 0x03, 0x0B, 0x76, 0x80, 0x01, 0x95, 0xF9, 0xF0, 0xE8,
    0xE5, 0x6E, 0x84, 0x00, 0x2D, 0x6A, 0x1D, 0x6A, 0x28, 0x6A, 0x34, 0x6A, 0x4B, 0xE9, 0xEE, 0xE6,
    0xE5, 0xF2, 0xE9, 0xEF, 0x72, 0x80, 0xF6, 0xE5, 0xED, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3,
    0x65, 0x80, 0xFF, 0x0D, 0x73, 0x02, 0x6A, 0x3A, 0x6A, 0x41, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xFE,
    0x63, 0xF5, 0xF0, 0xE5, 0xF2, 0xE9, 0xEF, 0x72, 0x80, 0xF6, 0xE6, 0xF4, 0xF7, 0x6F, 0x80, 0x20,
    0x10, 0x69, 0x95, 0x00, 0x69, 0x6A, 0x7F, 0x6A, 0x96, 0x6A, 0xB8, 0x6A, 0xE7, 0x6E, 0x71, 0x6E,
    0xE9, 0x6F, 0x0E, 0x6F, 0x29, 0x6F, 0xCB, 0x6F, 0xCF, 0x6F, 0xF5, 0x70, 0x0B, 0x70, 0x5F, 0x71,
    0x04, 0x71, 0x4F, 0x71, 0x57, 0x71, 0x64, 0x71, 0xBB, 0x71, 0xF4, 0x72, 0x10, 0x72, 0x3C, 0xE1,
    0x63, 0x02, 0x6A, 0x86, 0x6A, 0x8C, 0xF5, 0xF4, 0x65, 0x80, 0x00, 0xED, 0xF9, 0xF2, 0xE9, 0xEC,
    0xEC, 0xE9, 0x63, 0x80, 0x04, 0x4F, 0x62, 0x03, 0x6A, 0x9E, 0x6A, 0xA7, 0x6A, 0xB1, 0xE5, 0xEE,
    0xE7, 0xE1, 0xEC, 0x69, 0x80, 0x09, 0x87, 0xEF, 0xF0, 0xEF, 0xED, 0xEF, 0xE6, 0x6F, 0x80, 0x31,
    0x27, 0xF2, 0xE5, 0xF6, 0x65, 0x80, 0x01, 0x2D, 0x63, 0x03, 0x6A, 0xC0, 0x6A, 0xC7, 0x6A, 0xDD,
    0xE1, 0xF2, 0xEF, 0x6E, 0x80, 0x01, 0xD0, 0xE9, 0xF2, 0x63, 0x02, 0x6A, 0xCF, 0x6A, 0xD4, 0xEC,
    0x65, 0x80, 0x24, 0xD8, 0xF5, 0xED, 0xE6, 0xEC, 0xE5, 0x78, 0x80, 0x00, 0xEE, 0xF9, 0xF2, 0xE9,
    0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x56, 0x64, 0x04, 0x6A, 0xF1, 0x6A, 0xFB, 0x6E, 0x46, 0x6E,
    0x67, 0xE2, 0xEC, 0xE7, 0xF2, 0xE1, 0xF6, 0x65, 0x80, 0x02, 0x09, 0x65, 0x02, 0x6B, 0x01, 0x6E,
    0x41, 0xEF, 0xE7, 0xF2, 0xE1, 0xF0, 0x68, 0x07, 0x6B, 0x16, 0x6B, 0x24, 0x6B, 0x31, 0x6D, 0xEA,
    0x6E, 0x09, 0x6E, 0x16, 0x6E, 0x22, 0xE5, 0xE1, 0xF2, 0xF4, 0xE8, 0xE3, 0xE9, 0xF2, 0xE3, 0xEC,
    0x65, 0x80, 0x32, 0x8F, 0xE6, 0xE9, 0xF2, 0xE5, 0xE3, 0xE9, 0xF2, 0xE3, 0xEC, 0x65, 0x80, 0x32,
    0x8B, 0xE9, 0x63, 0x0E, 0x6B, 0x50, 0x6B, 0x60, 0x6B, 0xC3, 0x6B, 0xF9, 0x6C, 0x3B, 0x6C, 0x58,
    0x6C, 0x68, 0x6C, 0xA1, 0x6C, 0xD2, 0x6C, 0xDE, 0x6C, 0xF9, 0x6D, 0x3C, 0x6D, 0xC6, 0x6D, 0xE3,
    0xE1, 0xEC, 0xEC, 0xE9, 0xE1, 0xEE, 0xE3, 0xE5, 0xF0, 0xE1, 0xF2, 0xE5, 0x6E, 0x80, 0x32, 0x3F,
    0x63, 0x04, 0x6B, 0x6A, 0x6B, 0x75, 0x6B, 0x83, 0x6B, 0x8A, 0xE1, 0xEC, 0xEC, 0xF0, 0xE1, 0xF2,
    0xE5, 0x6E, 0x80, 0x32, 0x3A, 0xE5, 0xEE, 0xF4, 0xF2, 0xE5, 0xE3, 0xE9, 0xF2, 0xE3, 0xEC, 0x65,
    0x80, 0x32, 0xA5, 0xEC, 0xEF, 0xF3, 0x65, 0x80, 0x30, 0x06, 0x6F, 0x03, 0x6B, 0x92, 0x6B, 0xA1,
    0x6B, 0xB5, 0xED, 0xED, 0x61, 0x81, 0x30, 0x01, 0x6B, 0x9A, 0xEC, 0xE5, 0xE6, 0x74, 0x80, 0xFF,
    0x64, 0xEE, 0xE7, 0xF2, 0xE1, 0xF4, 0xF5, 0xEC, 0xE1, 0xF4, 0xE9, 0xEF, 0xEE, 0xF0, 0xE1, 0xF2,
    0xE5, 0x6E, 0x80, 0x32, 0x37, 0xF2, 0xF2, 0xE5, 0xE3, 0xF4, 0xE3, 0xE9, 0xF2, 0xE3, 0xEC, 0x65,
    0x80, 0x32, 0xA3, 0x65, 0x03, 0x6B, 0xCB, 0x6B, 0xD7, 0x6B, 0xE8, 0xE1, 0xF2, 0xF4, 0xE8, 0xF0,
    0xE1, 0xF2, 0xE5, 0x6E, 0x80, 0x32, 0x2F, 0xEE, 0xF4, 0xE5, 0xF2, 0xF0, 0xF2, 0xE9, 0xF3, 0xE5,
    0xF0, 0xE1, 0xF2, 0xE5, 0x6E, 0x80, 0x32, 0x3D, 0xF8, 0xE3, 0xE5, 0xEC, 0xEC, 0xE5, 0xEE, 0xF4,
    0xE3, 0xE9, 0xF2, 0xE3, 0xEC, 0x65, 0x80, 0x32, 0x9D, 0x66, 0x02, 0x6B, 0xFF, 0x6C, 0x0E, 0xE5,
    0xF3, 0xF4, 0xE9, 0xF6, 0xE1, 0xEC, 0xF0, 0xE1, 0xF2, 0xE5, 0x6E, 0x80, 0x32, 0x40, 0x69, 0x02,
    0x6C, 0x14, 0x6C, 0x31, 0xEE, 0xE1, 0xEE, 0xE3, 0xE9, 0xE1, 0x6C, 0x02, 0x6C, 0x20, 0x6C, 0x29,
    0xE3, 0xE9, 0xF2, 0xE3, 0xEC, 0x65, 0x80, 0x32, 0x96, 0xF0, 0xE1, 0xF2, 0xE5, 0x6E, 0x80, 0x32,
    0x36, 0xF2, 0xE5, 0xF0, 0xE1, 0xF2, 0xE5, 0x6E, 0x80, 0x32, 0x2B, 0x68, 0x02, 0x6C, 0x41, 0x6C,
    0x4C, 0xE1, 0xF6, 0xE5, 0xF0, 0xE1, 0xF2, 0xE5, 0x6E, 0x80, 0x32, 0x32, 0xE9, 0xE7, 0xE8, 0xE3,
    0xE9, 0xF2, 0xE3, 0xEC, 0x65, 0x80, 0x32, 0xA4, 0xE9, 0xF4, 0xE5, 0xF2, 0xE1, 0xF4, 0xE9, 0xEF,
    0xEE, 0xED, 0xE1, 0xF2, 0x6B, 0x80, 0x30, 0x05, 0x6C, 0x03, 0x6C, 0x70, 0x6C, 0x8A, 0x6C, 0x96,
    0xE1, 0xE2, 0xEF, 0x72, 0x02, 0x6C, 0x79, 0x6C, 0x82, 0xE3, 0xE9, 0xF2, 0xE3, 0xEC, 0x65, 0x80,
    0x32, 0x98, 0xF0, 0xE1, 0xF2, 0xE5, 0x6E, 0x80, 0x32, 0x38, 0xE5, 0xE6, 0xF4, 0xE3, 0xE9, 0xF2,
    0xE3, 0xEC, 0x65, 0x80, 0x32, 0xA7, 0xEF, 0xF7, 0xE3, 0xE9, 0xF2, 0xE3, 0xEC, 0x65, 0x80, 0x32,
    0xA6, 0x6D, 0x02, 0x6C, 0xA7, 0x6C, 0xC7, 0x65, 0x02, 0x6C, 0xAD, 0x6C, 0xBC, 0xE4, 0xE9, 0xE3,
    0xE9, 0xEE, 0xE5, 0xE3, 0xE9, 0xF2, 0xE3, 0xEC, 0x65, 0x80, 0x32, 0xA9, 0xF4, 0xE1, 0xEC, 0xF0,
    0xE1, 0xF2, 0xE5, 0x6E, 0x80, 0x32, 0x2E, 0xEF, 0xEF, 0xEE, 0xF0, 0xE1, 0xF2, 0xE5, 0x6E, 0x80,
    0x32, 0x2A, 0xEE, 0xE1, 0xED, 0xE5, 0xF0, 0xE1, 0xF2, 0xE5, 0x6E, 0x80, 0x32, 0x34, 0x70, 0x02,
    0x6C, 0xE4, 0x6C, 0xEC, 0xE5, 0xF2, 0xE9, 0xEF, 0x64, 0x80, 0x30, 0x02, 0xF2, 0xE9, 0xEE, 0xF4,
    0xE3, 0xE9, 0xF2, 0xE3, 0xEC, 0x65, 0x80, 0x32, 0x9E, 0x72, 0x02, 0x6C, 0xFF, 0x6D, 0x2F, 0x65,
    0x03, 0x6D, 0x07, 0x6D, 0x12, 0x6D, 0x21, 0xE1, 0xE3, 0xE8, 0xF0, 0xE1, 0xF2, 0xE5, 0x6E, 0x80,
    0x32, 0x43, 0xF0, 0xF2, 0xE5, 0xF3, 0xE5, 0xEE, 0xF4, 0xF0, 0xE1, 0xF2, 0xE5, 0x6E, 0x80, 0x32,
    0x39, 0xF3, 0xEF, 0xF5, 0xF2, 0xE3, 0xE5, 0xF0, 0xE1, 0xF2, 0xE5, 0x6E, 0x80, 0x32, 0x3E, 0xE9,
    0xE7, 0xE8, 0xF4, 0xE3, 0xE9, 0xF2, 0xE3, 0xEC, 0x65, 0x80, 0x32, 0xA8, 0x73, 0x05, 0x6D, 0x48,
    0x6D, 0x65, 0x6D, 0x73, 0x6D, 0x8C, 0x6D, 0xA8, 0x65, 0x02, 0x6D, 0x4E, 0x6D, 0x5B, 0xE3, 0xF2,
    0xE5, 0xF4, 0xE3, 0xE9, 0xF2, 0xE3, 0xEC, 0x65, 0x80, 0x32, 0x99, 0xEC, 0xE6, 0xF0, 0xE1, 0xF2,
    0xE5, 0x6E, 0x80, 0x32, 0x42, 0xEF, 0xE3, 0xE9, 0xE5, 0xF4, 0xF9, 0xF0, 0xE1, 0xF2, 0xE5, 0x6E,
    0x80, 0x32, 0x33, 0x70, 0x02, 0x6D, 0x79, 0x6D, 0x7F, 0xE1, 0xE3, 0x65, 0x80, 0x30, 0x00, 0xE5,
    0xE3, 0xE9, 0xE1, 0xEC, 0xF0, 0xE1, 0xF2, 0xE5, 0x6E, 0x80, 0x32, 0x35, 0x74, 0x02, 0x6D, 0x92,
    0x6D, 0x9D, 0xEF, 0xE3, 0xEB, 0xF0, 0xE1, 0xF2, 0xE5, 0x6E, 0x80, 0x32, 0x31, 0xF5, 0xE4, 0xF9,
    0xF0, 0xE1, 0xF2, 0xE5, 0x6E, 0x80, 0x32, 0x3B, 0x75, 0x02, 0x6D, 0xAE, 0x6D, 0xB7, 0xEE, 0xF0,
    0xE1, 0xF2, 0xE5, 0x6E, 0x80, 0x32, 0x30, 0xF0, 0xE5, 0xF2, 0xF6, 0xE9, 0xF3, 0xE5, 0xF0, 0xE1,
    0xF2, 0xE5, 0x6E, 0x80, 0x32, 0x3C, 0x77, 0x02, 0x6D, 0xCC, 0x6D, 0xD8, 0xE1, 0xF4, 0xE5, 0xF2,
    0xF0, 0xE1, 0xF2, 0xE5, 0x6E, 0x80, 0x32, 0x2C, 0xEF, 0xEF, 0xE4, 0xF0, 0xE1, 0xF2, 0xE5, 0x6E,
    0x80, 0x32, 0x2D, 0xFA, 0xE5, 0xF2, 0x6F, 0x80, 0x30, 0x07, 0x6D, 0x02, 0x6D, 0xF0, 0x6D, 0xFD,
    0xE5, 0xF4, 0xE1, 0xEC, 0xE3, 0xE9, 0xF2, 0xE3, 0xEC, 0x65, 0x80, 0x32, 0x8E, 0xEF, 0xEF, 0xEE,
    0xE3, 0xE9, 0xF2, 0xE3, 0xEC, 0x65, 0x80, 0x32, 0x8A, 0xEE, 0xE1, 0xED, 0xE5, 0xE3, 0xE9, 0xF2,
    0xE3, 0xEC, 0x65, 0x80, 0x32, 0x94, 0xF3, 0xF5, 0xEE, 0xE3, 0xE9, 0xF2, 0xE3, 0xEC, 0x65, 0x80,
    0x32, 0x90, 0x77, 0x02, 0x6E, 0x28, 0x6E, 0x35, 0xE1, 0xF4, 0xE5, 0xF2, 0xE3, 0xE9, 0xF2, 0xE3,
    0xEC, 0x65, 0x80, 0x32, 0x8C, 0xEF, 0xEF, 0xE4, 0xE3, 0xE9, 0xF2, 0xE3, 0xEC, 0x65, 0x80, 0x32,
    0x8D, 0xF6, 0x61, 0x80, 0x09, 0x07, 0xE9, 0xE5, 0xF2, 0xE5, 0xF3, 0xE9, 0x73, 0x82, 0x00, 0xEF,
    0x6E, 0x54, 0x6E, 0x5C, 0xE1, 0xE3, 0xF5, 0xF4, 0x65, 0x80, 0x1E, 0x2F, 0xE3, 0xF9, 0xF2, 0xE9,
    0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0xE5, 0xEF, 0xF4, 0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E,
    0xCB, 0x65, 0x03, 0x6E, 0x79, 0x6E, 0x89, 0x6E, 0x94, 0xE2, 0xF2, 0xE5, 0xF6, 0xE5, 0xE3, 0xF9,
    0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0xD7, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9,
    0x63, 0x80, 0x04, 0x35, 0xF5, 0xEE, 0x67, 0x04, 0x6E, 0xA0, 0x6E, 0xC3, 0x6E, 0xD2, 0x6E, 0xDB,
    0x61, 0x02, 0x6E, 0xA6, 0x6E, 0xB5, 0xE3, 0xE9, 0xF2, 0xE3, 0xEC, 0xE5, 0xEB, 0xEF, 0xF2, 0xE5,
    0xE1, 0x6E, 0x80, 0x32, 0x75, 0xF0, 0xE1, 0xF2, 0xE5, 0xEE, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E,
    0x80, 0x32, 0x15, 0xE3, 0xE9, 0xF2, 0xE3, 0xEC, 0xE5, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80,
    0x32, 0x67, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31, 0x47, 0xF0, 0xE1, 0xF2, 0xE5, 0xEE,
    0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x32, 0x07, 0x67, 0x02, 0x6E, 0xEF, 0x6E, 0xF6, 0xF2,
    0xE1, 0xF6, 0x65, 0x80, 0x00, 0xEC, 0x75, 0x02, 0x6E, 0xFC, 0x6F, 0x05, 0xEA, 0xE1, 0xF2, 0xE1,
    0xF4, 0x69, 0x80, 0x0A, 0x87, 0xF2, 0xED, 0xF5, 0xEB, 0xE8, 0x69, 0x80, 0x0A, 0x07, 0x68, 0x02,
    0x6F, 0x14, 0x6F, 0x1E, 0xE9, 0xF2, 0xE1, 0xE7, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0x44, 0xEF, 0xEF,
    0xEB, 0xE1, 0xE2, 0xEF, 0xF6, 0x65, 0x80, 0x1E, 0xC9, 0x69, 0x08, 0x6F, 0x3B, 0x6F, 0x45, 0x6F,
    0x50, 0x6F, 0x57, 0x6F, 0x70, 0x6F, 0x80, 0x6F, 0x8F, 0x6F, 0x9F, 0xE2, 0xE5, 0xEE, 0xE7, 0xE1,
    0xEC, 0x69, 0x80, 0x09, 0x88, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x38,
    0xE4, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x08, 0xE7, 0x75, 0x02, 0x6F, 0x5E, 0x6F, 0x67, 0xEA, 0xE1,
    0xF2, 0xE1, 0xF4, 0x69, 0x80, 0x0A, 0x88, 0xF2, 0xED, 0xF5, 0xEB, 0xE8, 0x69, 0x80, 0x0A, 0x08,
    0xED, 0xE1, 0xF4, 0xF2, 0xE1, 0xE7, 0xF5, 0xF2, 0xED, 0xF5, 0xEB, 0xE8, 0x69, 0x80, 0x0A, 0x40,
    0xEE, 0xF6, 0xE5, 0xF2, 0xF4, 0xE5, 0xE4, 0xE2, 0xF2, 0xE5, 0xF6, 0x65, 0x80, 0x02, 0x0B, 0xF3,
    0xE8, 0xEF, 0xF2, 0xF4, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x39, 0xF6,
    0xEF, 0xF7, 0xE5, 0xEC, 0xF3, 0xE9, 0xE7, 0x6E, 0x03, 0x6F, 0xAF, 0x6F, 0xB9, 0x6F, 0xC0, 0xE2,
    0xE5, 0xEE, 0xE7, 0xE1, 0xEC, 0x69, 0x80, 0x09, 0xC0, 0xE4, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x40,
    0xE7, 0xF5, 0xEA, 0xE1, 0xF2, 0xE1, 0xF4, 0x69, 0x80, 0x0A, 0xC0, 0x6A, 0x80, 0x01, 0x33, 0x6B,
    0x02, 0x6F, 0xD5, 0x6F, 0xED, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1, 0xEE, 0x61, 0x81, 0x30, 0xA4, 0x6F,
    0xE1, 0xE8, 0xE1, 0xEC, 0xE6, 0xF7, 0xE9, 0xE4, 0xF4, 0x68, 0x80, 0xFF, 0x72, 0xEF, 0xF2, 0xE5,
    0xE1, 0x6E, 0x80, 0x31, 0x63, 0x6C, 0x02, 0x6F, 0xFB, 0x70, 0x00, 0xE4, 0x65, 0x80, 0x02, 0xDC,
    0xF5, 0xF9, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xAC, 0x6D, 0x02, 0x70, 0x11, 0x70,
    0x54, 0x61, 0x03, 0x70, 0x19, 0x70, 0x2D, 0x70, 0x46, 0xE3, 0xF2, 0xEF, 0x6E, 0x81, 0x01, 0x2B,
    0x70, 0x22, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0xE3, 0xE7, 0xE5, 0xEF,
    0xF2, 0xE1, 0xF0, 0xF0, 0xF2, 0xEF, 0xF8, 0xE9, 0xED, 0xE1, 0xF4, 0xE5, 0xEC, 0xF9, 0xE5, 0xF1,
    0xF5, 0xE1, 0x6C, 0x80, 0x22, 0x53, 0xF4, 0xF2, 0xE1, 0xE7, 0xF5, 0xF2, 0xED, 0xF5, 0xEB, 0xE8,
    0x69, 0x80, 0x0A, 0x3F, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80, 0xFF, 0x49, 0x6E,
    0x05, 0x70, 0x6B, 0x70, 0x75, 0x70, 0x7E, 0x70, 0x8A, 0x70, 0xDE, 0xE3, 0xF2, 0xE5, 0xED, 0xE5,
    0xEE, 0x74, 0x80, 0x22, 0x06, 0xE6, 0xE9, 0xEE, 0xE9, 0xF4, 0x79, 0x80, 0x22, 0x1E, 0xE9, 0xE1,
    0xF2, 0xED, 0xE5, 0xEE, 0xE9, 0xE1, 0x6E, 0x80, 0x05, 0x6B, 0x74, 0x02, 0x70, 0x90, 0x70, 0xD4,
    0x65, 0x02, 0x70, 0x96, 0x70, 0xC9, 0xE7, 0xF2, 0xE1, 0x6C, 0x83, 0x22, 0x2B, 0x70, 0xA3, 0x70,
    0xB5, 0x70, 0xBA, 0x62, 0x02, 0x70, 0xA9, 0x70, 0xB1, 0xEF, 0xF4, 0xF4, 0xEF, 0x6D, 0x80, 0x23,
    0x21, 0x74, 0x80, 0x23, 0x21, 0xE5, 0x78, 0x80, 0xF8, 0xF5, 0x74, 0x02, 0x70, 0xC0, 0x70, 0xC5,
    0xEF, 0x70, 0x80, 0x23, 0x20, 0x70, 0x80, 0x23, 0x20, 0xF2, 0xF3, 0xE5, 0xE3, 0xF4, 0xE9, 0xEF,
    0x6E, 0x80, 0x22, 0x29, 0xE9, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0x05, 0x76, 0x03,
    0x70, 0xE6, 0x70, 0xEF, 0x70, 0xF8, 0xE2, 0xF5, 0xEC, 0xEC, 0xE5, 0x74, 0x80, 0x25, 0xD8, 0xE3,
    0xE9, 0xF2, 0xE3, 0xEC, 0x65, 0x80, 0x25, 0xD9, 0xF3, 0xED, 0xE9, 0xEC, 0xE5, 0xE6, 0xE1, 0xE3,
    0x65, 0x80, 0x26, 0x3B, 0x6F, 0x03, 0x71, 0x0C, 0x71, 0x17, 0x71, 0x1F, 0xE3, 0xF9, 0xF2, 0xE9,
    0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x51, 0xE7, 0xEF, 0xEE, 0xE5, 0x6B, 0x80, 0x01, 0x2F, 0xF4,
    0x61, 0x83, 0x03, 0xB9, 0x71, 0x2A, 0x71, 0x3F, 0x71, 0x47, 0xE4, 0xE9, 0xE5, 0xF2, 0xE5, 0xF3,
    0xE9, 0x73, 0x81, 0x03, 0xCA, 0x71, 0x37, 0xF4, 0xEF, 0xEE, 0xEF, 0x73, 0x80, 0x03, 0x90, 0xEC,
    0xE1, 0xF4, 0xE9, 0x6E, 0x80, 0x02, 0x69, 0xF4, 0xEF, 0xEE, 0xEF, 0x73, 0x80, 0x03, 0xAF, 0xF0,
    0xE1, 0xF2, 0xE5, 0x6E, 0x80, 0x24, 0xA4, 0xF2, 0xE9, 0xE7, 0xF5, 0xF2, 0xED, 0xF5, 0xEB, 0xE8,
    0x69, 0x80, 0x0A, 0x72, 0x73, 0x04, 0x71, 0x6E, 0x71, 0x9B, 0x71, 0xA9, 0x71, 0xB1, 0xED, 0xE1,
    0xEC, 0x6C, 0x02, 0x71, 0x77, 0x71, 0x82, 0xE8, 0xE9, 0xF2, 0xE1, 0xE7, 0xE1, 0xEE, 0x61, 0x80,
    0x30, 0x43, 0xEB, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1, 0xEE, 0x61, 0x81, 0x30, 0xA3, 0x71, 0x8F, 0xE8,
    0xE1, 0xEC, 0xE6, 0xF7, 0xE9, 0xE4, 0xF4, 0x68, 0x80, 0xFF, 0x68, 0xF3, 0xE8, 0xE1, 0xF2, 0xE2,
    0xE5, 0xEE, 0xE7, 0xE1, 0xEC, 0x69, 0x80, 0x09, 0xFA, 0xF4, 0xF2, 0xEF, 0xEB, 0x65, 0x80, 0x02,
    0x68, 0xF5, 0xF0, 0xE5, 0xF2, 0xE9, 0xEF, 0x72, 0x80, 0xF6, 0xED, 0x74, 0x02, 0x71, 0xC1, 0x71,
    0xE3, 0xE5, 0xF2, 0xE1, 0xF4, 0xE9, 0xEF, 0x6E, 0x02, 0x71, 0xCD, 0x71, 0xD8, 0xE8, 0xE9, 0xF2,
    0xE1, 0xE7, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0x9D, 0xEB, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1, 0xEE, 0x61,
    0x80, 0x30, 0xFD, 0xE9, 0xEC, 0xE4, 0x65, 0x81, 0x01, 0x29, 0x71, 0xEC, 0xE2, 0xE5, 0xEC, 0xEF,
    0x77, 0x80, 0x1E, 0x2D, 0x75, 0x02, 0x71, 0xFA, 0x72, 0x05, 0xE2, 0xEF, 0xF0, 0xEF, 0xED, 0xEF,
    0xE6, 0x6F, 0x80, 0x31, 0x29, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x4E,
    0xF6, 0xEF, 0xF7, 0xE5, 0xEC, 0xF3, 0xE9, 0xE7, 0x6E, 0x03, 0x72, 0x20, 0x72, 0x2A, 0x72, 0x31,
    0xE2, 0xE5, 0xEE, 0xE7, 0xE1, 0xEC, 0x69, 0x80, 0x09, 0xBF, 0xE4, 0xE5, 0xF6, 0x61, 0x80, 0x09,
    0x3F, 0xE7, 0xF5, 0xEA, 0xE1, 0xF2, 0xE1, 0xF4, 0x69, 0x80, 0x0A, 0xBF, 0xFA, 0xE8, 0xE9, 0xF4,
    0xF3, 0x61, 0x02, 0x72, 0x47, 0x72, 0x52, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80,
    0x04, 0x75, 0xE4, 0xE2, 0xEC, 0xE7, 0xF2, 0xE1, 0xF6, 0xE5, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC,
    0xE9, 0x63, 0x80, 0x04, 0x77, 0x6A, 0x8A, 0x00, 0x6A, 0x72, 0x7D, 0x72, 0xBC, 0x72, 0xC7, 0x72,
    0xF9, 0x73, 0x09, 0x73, 0x7A, 0x73, 0xBF, 0x73, 0xC4, 0x73, 0xD0, 0x73, 0xD8, 0x61, 0x04, 0x72,
    0x87, 0x72, 0x92, 0x72, 0x9C, 0x72, 0xA3, 0xE1, 0xF2, 0xED, 0xE5, 0xEE, 0xE9, 0xE1, 0x6E, 0x80,
    0x05, 0x71, 0xE2, 0xE5, 0xEE, 0xE7, 0xE1, 0xEC, 0x69, 0x80, 0x09, 0x9C, 0xE4, 0xE5, 0xF6, 0x61,
    0x80, 0x09, 0x1C, 0xE7, 0x75, 0x02, 0x72, 0xAA, 0x72, 0xB3, 0xEA, 0xE1, 0xF2, 0xE1, 0xF4, 0x69,
    0x80, 0x0A, 0x9C, 0xF2, 0xED, 0xF5, 0xEB, 0xE8, 0x69, 0x80, 0x0A, 0x1C, 0xE2, 0xEF, 0xF0, 0xEF,
    0xED, 0xEF, 0xE6, 0x6F, 0x80, 0x31, 0x10, 0x63, 0x03, 0x72, 0xCF, 0x72, 0xD6, 0x72, 0xEC, 0xE1,
    0xF2, 0xEF, 0x6E, 0x80, 0x01, 0xF0, 0xE9, 0xF2, 0x63, 0x02, 0x72, 0xDE, 0x72, 0xE3, 0xEC, 0x65,
    0x80, 0x24, 0xD9, 0xF5, 0xED, 0xE6, 0xEC, 0xE5, 0x78, 0x80, 0x01, 0x35, 0xF2, 0xEF, 0xF3, 0xF3,
    0xE5, 0xE4, 0xF4, 0xE1, 0xE9, 0x6C, 0x80, 0x02, 0x9D, 0xE4, 0xEF, 0xF4, 0xEC, 0xE5, 0xF3, 0xF3,
    0xF3, 0xF4, 0xF2, 0xEF, 0xEB, 0x65, 0x80, 0x02, 0x5F, 0x65, 0x03, 0x73, 0x11, 0x73, 0x1C, 0x73,
    0x5D, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x58, 0xE5, 0x6D, 0x04, 0x73,
    0x27, 0x73, 0x30, 0x73, 0x3E, 0x73, 0x4E, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0x06, 0x2C,
    0xE6, 0xE9, 0xEE, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE, 0x9E, 0xE9, 0xEE,
    0xE9, 0xF4, 0xE9, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE, 0x9F, 0xED, 0xE5,
    0xE4, 0xE9, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE, 0xA0, 0x68, 0x02, 0x73,
    0x63, 0x73, 0x6C, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0x06, 0x98, 0xE6, 0xE9, 0xEE, 0xE1,
    0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFB, 0x8B, 0x68, 0x02, 0x73, 0x80, 0x73, 0xB2,
    0x61, 0x03, 0x73, 0x88, 0x73, 0x92, 0x73, 0x99, 0xE2, 0xE5, 0xEE, 0xE7, 0xE1, 0xEC, 0x69, 0x80,
    0x09, 0x9D, 0xE4, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x1D, 0xE7, 0x75, 0x02, 0x73, 0xA0, 0x73, 0xA9,
    0xEA, 0xE1, 0xF2, 0xE1, 0xF4, 0x69, 0x80, 0x0A, 0x9D, 0xF2, 0xED, 0xF5, 0xEB, 0xE8, 0x69, 0x80,
    0x0A, 0x1D, 0xE5, 0xE8, 0xE1, 0xF2, 0xED, 0xE5, 0xEE, 0xE9, 0xE1, 0x6E, 0x80, 0x05, 0x7B, 0xE9,
    0x73, 0x80, 0x30, 0x04, 0xED, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80, 0xFF, 0x4A,
    0xF0, 0xE1, 0xF2, 0xE5, 0x6E, 0x80, 0x24, 0xA5, 0xF3, 0xF5, 0xF0, 0xE5, 0xF2, 0xE9, 0xEF, 0x72,
    0x80, 0x02, 0xB2, 0x6B, 0x92, 0x00, 0x6B, 0x74, 0x0B, 0x76, 0x64, 0x76, 0x6F, 0x76, 0xAD, 0x76,
    0xB8, 0x77, 0x12, 0x77, 0x20, 0x78, 0x8C, 0x79, 0x50, 0x79, 0x5D, 0x79, 0x77, 0x79, 0xA8, 0x7A,
    0x32, 0x7A, 0x48, 0x7A, 0x55, 0x7A, 0x6C, 0x7A, 0x96, 0x7A, 0xA0, 0x61, 0x0C, 0x74, 0x25, 0x74,
    0x45, 0x74, 0x5B, 0x74, 0x79, 0x74, 0xEB, 0x75, 0x04, 0x75, 0x22, 0x75, 0x3B, 0x75, 0xA5, 0x75,
    0xB3, 0x76, 0x2E, 0x76, 0x4B, 0x62, 0x02, 0x74, 0x2B, 0x74, 0x3C, 0xE1, 0xF3, 0xE8, 0xEB, 0xE9,
    0xF2, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0xA1, 0xE5, 0xEE, 0xE7, 0xE1,
    0xEC, 0x69, 0x80, 0x09, 0x95, 0x63, 0x02, 0x74, 0x4B, 0x74, 0x51, 0xF5, 0xF4, 0x65, 0x80, 0x1E,
    0x31, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x3A, 0xE4, 0x65, 0x02, 0x74, 0x62,
    0x74, 0x74, 0xF3, 0xE3, 0xE5, 0xEE, 0xE4, 0xE5, 0xF2, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9,
    0x63, 0x80, 0x04, 0x9B, 0xF6, 0x61, 0x80, 0x09, 0x15, 0x66, 0x87, 0x05, 0xDB, 0x74, 0x8B, 0x74,
    0x94, 0x74, 0xA8, 0x74, 0xB6, 0x74, 0xBF, 0x74, 0xCF, 0x74, 0xDE, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9,
    0x63, 0x80, 0x06, 0x43, 0xE4, 0xE1, 0xE7, 0xE5, 0xF3, 0x68, 0x81, 0xFB, 0x3B, 0x74, 0x9F, 0xE8,
    0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0xFB, 0x3B, 0xE6, 0xE9, 0xEE, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1,
    0xE2, 0xE9, 0x63, 0x80, 0xFE, 0xDA, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xDB, 0xE9,
    0xEE, 0xE9, 0xF4, 0xE9, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE, 0xDB, 0xED,
    0xE5, 0xE4, 0xE9, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE, 0xDC, 0xF2, 0xE1,
    0xE6, 0xE5, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0xFB, 0x4D, 0xE7, 0x75, 0x02, 0x74, 0xF2,
    0x74, 0xFB, 0xEA, 0xE1, 0xF2, 0xE1, 0xF4, 0x69, 0x80, 0x0A, 0x95, 0xF2, 0xED, 0xF5, 0xEB, 0xE8,
    0x69, 0x80, 0x0A, 0x15, 0x68, 0x02, 0x75, 0x0A, 0x75, 0x14, 0xE9, 0xF2, 0xE1, 0xE7, 0xE1, 0xEE,
    0x61, 0x80, 0x30, 0x4B, 0xEF, 0xEF, 0xEB, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80,
    0x04, 0xC4, 0xEB, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1, 0xEE, 0x61, 0x81, 0x30, 0xAB, 0x75, 0x2F, 0xE8,
    0xE1, 0xEC, 0xE6, 0xF7, 0xE9, 0xE4, 0xF4, 0x68, 0x80, 0xFF, 0x76, 0x70, 0x02, 0x75, 0x41, 0x75,
    0x56, 0xF0, 0x61, 0x81, 0x03, 0xBA, 0x75, 0x48, 0xF3, 0xF9, 0xED, 0xE2, 0xEF, 0xEC, 0xE7, 0xF2,
    0xE5, 0xE5, 0x6B, 0x80, 0x03, 0xF0, 0xF9, 0xE5, 0xEF, 0xF5, 0x6E, 0x03, 0x75, 0x62, 0x75, 0x70,
    0x75, 0x92, 0xED, 0xE9, 0xE5, 0xF5, 0xED, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31, 0x71,
    0x70, 0x02, 0x75, 0x76, 0x75, 0x85, 0xE8, 0xE9, 0xE5, 0xF5, 0xF0, 0xE8, 0xEB, 0xEF, 0xF2, 0xE5,
    0xE1, 0x6E, 0x80, 0x31, 0x84, 0xE9, 0xE5, 0xF5, 0xF0, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80,
    0x31, 0x78, 0xF3, 0xF3, 0xE1, 0xEE, 0xE7, 0xF0, 0xE9, 0xE5, 0xF5, 0xF0, 0xEB, 0xEF, 0xF2, 0xE5,
    0xE1, 0x6E, 0x80, 0x31, 0x79, 0xF2, 0xEF, 0xF2, 0xE9, 0xE9, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65,
    0x80, 0x33, 0x0D, 0x73, 0x05, 0x75, 0xBF, 0x75, 0xEB, 0x75, 0xFA, 0x76, 0x02, 0x76, 0x1E, 0xE8,
    0xE9, 0xE4, 0xE1, 0xE1, 0xF5, 0xF4, 0x6F, 0x02, 0x75, 0xCC, 0x75, 0xD5, 0xE1, 0xF2, 0xE1, 0xE2,
    0xE9, 0x63, 0x80, 0x06, 0x40, 0xEE, 0xEF, 0xF3, 0xE9, 0xE4, 0xE5, 0xE2, 0xE5, 0xE1, 0xF2, 0xE9,
    0xEE, 0xE7, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0x06, 0x40, 0xED, 0xE1, 0xEC, 0xEC, 0xEB,
    0xE1, 0xF4, 0xE1, 0xEB, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0xF5, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80,
    0x33, 0x84, 0xF2, 0x61, 0x02, 0x76, 0x09, 0x76, 0x12, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80,
    0x06, 0x50, 0xF4, 0xE1, 0xEE, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0x06, 0x4D, 0xF4, 0xF2,
    0xEF, 0xEB, 0xE5, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x9F, 0xF4, 0xE1,
    0xE8, 0xE9, 0xF2, 0xE1, 0xF0, 0xF2, 0xEF, 0xEC, 0xEF, 0xEE, 0xE7, 0xED, 0xE1, 0xF2, 0xEB, 0xE8,
    0xE1, 0xEC, 0xE6, 0xF7, 0xE9, 0xE4, 0xF4, 0x68, 0x80, 0xFF, 0x70, 0xF6, 0xE5, 0xF2, 0xF4, 0xE9,
    0xE3, 0xE1, 0xEC, 0xF3, 0xF4, 0xF2, 0xEF, 0xEB, 0xE5, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9,
    0x63, 0x80, 0x04, 0x9D, 0xE2, 0xEF, 0xF0, 0xEF, 0xED, 0xEF, 0xE6, 0x6F, 0x80, 0x31, 0x0E, 0x63,
    0x04, 0x76, 0x79, 0x76, 0x8F, 0x76, 0x98, 0x76, 0xA0, 0x61, 0x02, 0x76, 0x7F, 0x76, 0x89, 0xEC,
    0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0x89, 0xF2, 0xEF, 0x6E, 0x80, 0x01, 0xE9, 0xE5,
    0xE4, 0xE9, 0xEC, 0xEC, 0x61, 0x80, 0x01, 0x37, 0xE9, 0xF2, 0xE3, 0xEC, 0x65, 0x80, 0x24, 0xDA,
    0xEF, 0xED, 0xED, 0xE1, 0xE1, 0xE3, 0xE3, 0xE5, 0xEE, 0x74, 0x80, 0x01, 0x37, 0xE4, 0xEF, 0xF4,
    0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E, 0x33, 0x65, 0x04, 0x76, 0xC2, 0x76, 0xDD, 0x76, 0xF6,
    0x77, 0x02, 0x68, 0x02, 0x76, 0xC8, 0x76, 0xD3, 0xE1, 0xF2, 0xED, 0xE5, 0xEE, 0xE9, 0xE1, 0x6E,
    0x80, 0x05, 0x84, 0xE9, 0xF2, 0xE1, 0xE7, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0x96, 0xEB, 0xE1, 0xF4,
    0xE1, 0xEB, 0xE1, 0xEE, 0x61, 0x81, 0x30, 0xB1, 0x76, 0xEA, 0xE8, 0xE1, 0xEC, 0xE6, 0xF7, 0xE9,
    0xE4, 0xF4, 0x68, 0x80, 0xFF, 0x79, 0xEE, 0xE1, 0xF2, 0xED, 0xE5, 0xEE, 0xE9, 0xE1, 0x6E, 0x80,
    0x05, 0x6F, 0xF3, 0xED, 0xE1, 0xEC, 0xEC, 0xEB, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1, 0xEE, 0x61, 0x80,
    0x30, 0xF6, 0xE7, 0xF2, 0xE5, 0xE5, 0xEE, 0xEC, 0xE1, 0xEE, 0xE4, 0xE9, 0x63, 0x80, 0x01, 0x38,
    0x68, 0x06, 0x77, 0x2E, 0x77, 0xAF, 0x77, 0xBA, 0x77, 0xD3, 0x78, 0x2A, 0x78, 0x82, 0x61, 0x05,
    0x77, 0x3A, 0x77, 0x44, 0x77, 0x4F, 0x77, 0x56, 0x77, 0x6F, 0xE2, 0xE5, 0xEE, 0xE7, 0xE1, 0xEC,
    0x69, 0x80, 0x09, 0x96, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x45, 0xE4,
    0xE5, 0xF6, 0x61, 0x80, 0x09, 0x16, 0xE7, 0x75, 0x02, 0x77, 0x5D, 0x77, 0x66, 0xEA, 0xE1, 0xF2,
    0xE1, 0xF4, 0x69, 0x80, 0x0A, 0x96, 0xF2, 0xED, 0xF5, 0xEB, 0xE8, 0x69, 0x80, 0x0A, 0x16, 0x68,
    0x04, 0x77, 0x79, 0x77, 0x82, 0x77, 0x90, 0x77, 0xA0, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80,
    0x06, 0x2E, 0xE6, 0xE9, 0xEE, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE, 0xA6,
    0xE9, 0xEE, 0xE9, 0xF4, 0xE9, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE, 0xA7,
    0xED, 0xE5, 0xE4, 0xE9, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE, 0xA8, 0xE5,
    0xE9, 0xE3, 0xEF, 0xF0, 0xF4, 0xE9, 0x63, 0x80, 0x03, 0xE7, 0xE8, 0x61, 0x02, 0x77, 0xC1, 0x77,
    0xC8, 0xE4, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x59, 0xE7, 0xF5, 0xF2, 0xED, 0xF5, 0xEB, 0xE8, 0x69,
    0x80, 0x0A, 0x59, 0xE9, 0xE5, 0xF5, 0xEB, 0x68, 0x04, 0x77, 0xE1, 0x78, 0x04, 0x78, 0x13, 0x78,
    0x1C, 0x61, 0x02, 0x77, 0xE7, 0x77, 0xF6, 0xE3, 0xE9, 0xF2, 0xE3, 0xEC, 0xE5, 0xEB, 0xEF, 0xF2,
    0xE5, 0xE1, 0x6E, 0x80, 0x32, 0x78, 0xF0, 0xE1, 0xF2, 0xE5, 0xEE, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1,
    0x6E, 0x80, 0x32, 0x18, 0xE3, 0xE9, 0xF2, 0xE3, 0xEC, 0xE5, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E,
    0x80, 0x32, 0x6A, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31, 0x4B, 0xF0, 0xE1, 0xF2, 0xE5,
    0xEE, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x32, 0x0A, 0x6F, 0x04, 0x78, 0x34, 0x78, 0x65,
    0x78, 0x6F, 0x78, 0x74, 0xEB, 0x68, 0x04, 0x78, 0x3F, 0x78, 0x48, 0x78, 0x51, 0x78, 0x5B, 0xE1,
    0xE9, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x02, 0xEF, 0xEE, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0x0E,
    0x05, 0xF5, 0xE1, 0xF4, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x03, 0xF7, 0xE1, 0xE9, 0xF4, 0xE8,
    0xE1, 0x69, 0x80, 0x0E, 0x04, 0xED, 0xF5, 0xF4, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x5B, 0xEF,
    0x6B, 0x80, 0x01, 0x99, 0xF2, 0xE1, 0xEB, 0xE8, 0xE1, 0xEE, 0xE7, 0xF4, 0xE8, 0xE1, 0x69, 0x80,
    0x0E, 0x06, 0xFA, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0x91, 0x69, 0x04, 0x78, 0x96,
    0x78, 0xA1, 0x78, 0xBA, 0x78, 0xEB, 0xE8, 0xE9, 0xF2, 0xE1, 0xE7, 0xE1, 0xEE, 0x61, 0x80, 0x30,
    0x4D, 0xEB, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1, 0xEE, 0x61, 0x81, 0x30, 0xAD, 0x78, 0xAE, 0xE8, 0xE1,
    0xEC, 0xE6, 0xF7, 0xE9, 0xE4, 0xF4, 0x68, 0x80, 0xFF, 0x77, 0xF2, 0x6F, 0x03, 0x78, 0xC3, 0x78,
    0xD2, 0x78, 0xE2, 0xE7, 0xF5, 0xF2, 0xE1, 0xED, 0xF5, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80,
    0x33, 0x15, 0xED, 0xE5, 0xE5, 0xF4, 0xEF, 0xF2, 0xF5, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80,
    0x33, 0x16, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0x14, 0xF9, 0xE5, 0xEF, 0x6B, 0x05,
    0x78, 0xFA, 0x79, 0x1D, 0x79, 0x2C, 0x79, 0x35, 0x79, 0x43, 0x61, 0x02, 0x79, 0x00, 0x79, 0x0F,
    0xE3, 0xE9, 0xF2, 0xE3, 0xEC, 0xE5, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x32, 0x6E, 0xF0,
    0xE1, 0xF2, 0xE5, 0xEE, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x32, 0x0E, 0xE3, 0xE9, 0xF2,
    0xE3, 0xEC, 0xE5, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x32, 0x60, 0xEB, 0xEF, 0xF2, 0xE5,
    0xE1, 0x6E, 0x80, 0x31, 0x31, 0xF0, 0xE1, 0xF2, 0xE5, 0xEE, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E,
    0x80, 0x32, 0x00, 0xF3, 0xE9, 0xEF, 0xF3, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31, 0x33,
    0xEA, 0xE5, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x5C, 0x6C, 0x02, 0x79,
    0x63, 0x79, 0x6E, 0xE9, 0xEE, 0xE5, 0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E, 0x35, 0xF3, 0xF1,
    0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0x98, 0x6D, 0x03, 0x79, 0x7F, 0x79, 0x8D, 0x79, 0x98, 0xE3,
    0xF5, 0xE2, 0xE5, 0xE4, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0xA6, 0xEF, 0xEE, 0xEF,
    0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80, 0xFF, 0x4B, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0xE5, 0xE4, 0xF3,
    0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0xA2, 0x6F, 0x05, 0x79, 0xB4, 0x79, 0xCE, 0x79, 0xF4,
    0x7A, 0x00, 0x7A, 0x0E, 0x68, 0x02, 0x79, 0xBA, 0x79, 0xC4, 0xE9, 0xF2, 0xE1, 0xE7, 0xE1, 0xEE,
    0x61, 0x80, 0x30, 0x53, 0xED, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0xC0, 0xEB, 0x61,
    0x02, 0x79, 0xD5, 0x79, 0xDD, 0xE9, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x01, 0xF4, 0xE1, 0xEB,
    0xE1, 0xEE, 0x61, 0x81, 0x30, 0xB3, 0x79, 0xE8, 0xE8, 0xE1, 0xEC, 0xE6, 0xF7, 0xE9, 0xE4, 0xF4,
    0x68, 0x80, 0xFF, 0x7A, 0xEF, 0xF0, 0xEF, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0x1E,
    0xF0, 0xF0, 0xE1, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x81, 0x72, 0x02,
    0x7A, 0x14, 0x7A, 0x28, 0xE5, 0xE1, 0xEE, 0xF3, 0xF4, 0xE1, 0xEE, 0xE4, 0xE1, 0xF2, 0xE4, 0xF3,
    0xF9, 0xED, 0xE2, 0xEF, 0x6C, 0x80, 0x32, 0x7F, 0xEF, 0xEE, 0xE9, 0xF3, 0xE3, 0xED, 0x62, 0x80,
    0x03, 0x43, 0xF0, 0x61, 0x02, 0x7A, 0x39, 0x7A, 0x3F, 0xF2, 0xE5, 0x6E, 0x80, 0x24, 0xA6, 0xF3,
    0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0xAA, 0xF3, 0xE9, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC,
    0xE9, 0x63, 0x80, 0x04, 0x6F, 0x74, 0x02, 0x7A, 0x5B, 0x7A, 0x64, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2,
    0x65, 0x80, 0x33, 0xCF, 0xF5, 0xF2, 0xEE, 0xE5, 0x64, 0x80, 0x02, 0x9E, 0x75, 0x02, 0x7A, 0x72,
    0x7A, 0x7D, 0xE8, 0xE9, 0xF2, 0xE1, 0xE7, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0x4F, 0xEB, 0xE1, 0xF4,
    0xE1, 0xEB, 0xE1, 0xEE, 0x61, 0x81, 0x30, 0xAF, 0x7A, 0x8A, 0xE8, 0xE1, 0xEC, 0xE6, 0xF7, 0xE9,
    0xE4, 0xF4, 0x68, 0x80, 0xFF, 0x78, 0xF6, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0xB8,
    0xF7, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0xBE, 0x6C, 0x92, 0x00, 0x6C, 0x7A, 0xD2,
    0x7C, 0xED, 0x7D, 0x0A, 0x7D, 0x4C, 0x7D, 0x72, 0x7E, 0x0A, 0x7E, 0x13, 0x7E, 0x23, 0x7E, 0x3B,
    0x7E, 0x4D, 0x7E, 0xC3, 0x7E, 0xEC, 0x7F, 0x73, 0x7F, 0x7B, 0x7F, 0x9C, 0x7F, 0xA5, 0x7F, 0xAD,
    0x7F, 0xEB, 0x61, 0x07, 0x7A, 0xE2, 0x7A, 0xEC, 0x7A, 0xF3, 0x7A, 0xFA, 0x7B, 0x13, 0x7B, 0x23,
    0x7C, 0xE1, 0xE2, 0xE5, 0xEE, 0xE7, 0xE1, 0xEC, 0x69, 0x80, 0x09, 0xB2, 0xE3, 0xF5, 0xF4, 0x65,
    0x80, 0x01, 0x3A, 0xE4, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x32, 0xE7, 0x75, 0x02, 0x7B, 0x01, 0x7B,
    0x0A, 0xEA, 0xE1, 0xF2, 0xE1, 0xF4, 0x69, 0x80, 0x0A, 0xB2, 0xF2, 0xED, 0xF5, 0xEB, 0xE8, 0x69,
    0x80, 0x0A, 0x32, 0xEB, 0xEB, 0xE8, 0xE1, 0xEE, 0xE7, 0xF9, 0xE1, 0xEF, 0xF4, 0xE8, 0xE1, 0x69,
    0x80, 0x0E, 0x45, 0x6D, 0x0A, 0x7B, 0x39, 0x7B, 0xFC, 0x7C, 0x0D, 0x7C, 0x33, 0x7C, 0x41, 0x7C,
    0x54, 0x7C, 0x64, 0x7C, 0x78, 0x7C, 0x8C, 0x7C, 0xA3, 0x61, 0x02, 0x7B, 0x3F, 0x7B, 0xF4, 0xEC,
    0xE5, 0x66, 0x04, 0x7B, 0x4B, 0x7B, 0x59, 0x7B, 0xB5, 0x7B, 0xC6, 0xE6, 0xE9, 0xEE, 0xE1, 0xEC,
    0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE, 0xFC, 0xE8, 0xE1, 0xED, 0xFA, 0x61, 0x02, 0x7B,
    0x63, 0x7B, 0x8C, 0xE1, 0xE2, 0xEF, 0xF6, 0x65, 0x02, 0x7B, 0x6D, 0x7B, 0x7B, 0xE6, 0xE9, 0xEE,
    0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE, 0xF8, 0xE9, 0xF3, 0xEF, 0xEC, 0xE1,
    0xF4, 0xE5, 0xE4, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE, 0xF7, 0xE2, 0xE5, 0xEC, 0xEF,
    0x77, 0x02, 0x7B, 0x96, 0x7B, 0xA4, 0xE6, 0xE9, 0xEE, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9,
    0x63, 0x80, 0xFE, 0xFA, 0xE9, 0xF3, 0xEF, 0xEC, 0xE1, 0xF4, 0xE5, 0xE4, 0xE1, 0xF2, 0xE1, 0xE2,
    0xE9, 0x63, 0x80, 0xFE, 0xF9, 0xE9, 0xF3, 0xEF, 0xEC, 0xE1, 0xF4, 0xE5, 0xE4, 0xE1, 0xF2, 0xE1,
    0xE2, 0xE9, 0x63, 0x80, 0xFE, 0xFB, 0xED, 0xE1, 0xE4, 0xE4, 0xE1, 0xE1, 0xE2, 0xEF, 0xF6, 0x65,
    0x02, 0x7B, 0xD5, 0x7B, 0xE3, 0xE6, 0xE9, 0xEE, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63,
    0x80, 0xFE, 0xF6, 0xE9, 0xF3, 0xEF, 0xEC, 0xE1, 0xF4, 0xE5, 0xE4, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9,
    0x63, 0x80, 0xFE, 0xF5, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0x06, 0x44, 0xE2, 0xE4, 0x61, 0x81,
    0x03, 0xBB, 0x7C, 0x04, 0xF3, 0xF4, 0xF2, 0xEF, 0xEB, 0x65, 0x80, 0x01, 0x9B, 0xE5, 0x64, 0x82,
    0x05, 0xDC, 0x7C, 0x16, 0x7C, 0x2A, 0xE4, 0xE1, 0xE7, 0xE5, 0xF3, 0x68, 0x81, 0xFB, 0x3C, 0x7C,
    0x21, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0xFB, 0x3C, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77,
    0x80, 0x05, 0xDC, 0xE6, 0xE9, 0xEE, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE,
    0xDE, 0xE8, 0xE1, 0xE8, 0xE9, 0xEE, 0xE9, 0xF4, 0xE9, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9,
    0x63, 0x80, 0xFC, 0xCA, 0xE9, 0xEE, 0xE9, 0xF4, 0xE9, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9,
    0x63, 0x80, 0xFE, 0xDF, 0xEA, 0xE5, 0xE5, 0xED, 0xE9, 0xEE, 0xE9, 0xF4, 0xE9, 0xE1, 0xEC, 0xE1,
    0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFC, 0xC9, 0xEB, 0xE8, 0xE1, 0xE8, 0xE9, 0xEE, 0xE9, 0xF4,
    0xE9, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFC, 0xCB, 0xEC, 0xE1, 0xED, 0xE8,
    0xE5, 0xE8, 0xE9, 0xF3, 0xEF, 0xEC, 0xE1, 0xF4, 0xE5, 0xE4, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63,
    0x80, 0xFD, 0xF2, 0xED, 0x65, 0x02, 0x7C, 0xAA, 0x7C, 0xB7, 0xE4, 0xE9, 0xE1, 0xEC, 0xE1, 0xF2,
    0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE, 0xE0, 0xE5, 0x6D, 0x02, 0x7C, 0xBE, 0x7C, 0xD1, 0xE8, 0xE1,
    0xE8, 0xE9, 0xEE, 0xE9, 0xF4, 0xE9, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFD,
    0x88, 0xE9, 0xEE, 0xE9, 0xF4, 0xE9, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFC,
    0xCC, 0xF2, 0xE7, 0xE5, 0xE3, 0xE9, 0xF2, 0xE3, 0xEC, 0x65, 0x80, 0x25, 0xEF, 0x62, 0x03, 0x7C,
    0xF5, 0x7C, 0xFA, 0x7D, 0x00, 0xE1, 0x72, 0x80, 0x01, 0x9A, 0xE5, 0xEC, 0x74, 0x80, 0x02, 0x6C,
    0xEF, 0xF0, 0xEF, 0xED, 0xEF, 0xE6, 0x6F, 0x80, 0x31, 0x0C, 0x63, 0x04, 0x7D, 0x14, 0x7D, 0x1B,
    0x7D, 0x24, 0x7D, 0x3F, 0xE1, 0xF2, 0xEF, 0x6E, 0x80, 0x01, 0x3E, 0xE5, 0xE4, 0xE9, 0xEC, 0xEC,
    0x61, 0x80, 0x01, 0x3C, 0xE9, 0xF2, 0x63, 0x02, 0x7D, 0x2C, 0x7D, 0x31, 0xEC, 0x65, 0x80, 0x24,
    0xDB, 0xF5, 0xED, 0xE6, 0xEC, 0xE5, 0xF8, 0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E, 0x3D, 0xEF,
    0xED, 0xED, 0xE1, 0xE1, 0xE3, 0xE3, 0xE5, 0xEE, 0x74, 0x80, 0x01, 0x3C, 0xE4, 0xEF, 0x74, 0x82,
    0x01, 0x40, 0x7D, 0x56, 0x7D, 0x5F, 0xE1, 0xE3, 0xE3, 0xE5, 0xEE, 0x74, 0x80, 0x01, 0x40, 0xE2,
    0xE5, 0xEC, 0xEF, 0x77, 0x81, 0x1E, 0x37, 0x7D, 0x69, 0xED, 0xE1, 0xE3, 0xF2, 0xEF, 0x6E, 0x80,
    0x1E, 0x39, 0x65, 0x03, 0x7D, 0x7A, 0x7D, 0xA0, 0x7E, 0x05, 0xE6, 0x74, 0x02, 0x7D, 0x81, 0x7D,
    0x91, 0xE1, 0xEE, 0xE7, 0xEC, 0xE5, 0xE1, 0xE2, 0xEF, 0xF6, 0xE5, 0xE3, 0xED, 0x62, 0x80, 0x03,
    0x1A, 0xF4, 0xE1, 0xE3, 0xEB, 0xE2, 0xE5, 0xEC, 0xEF, 0xF7, 0xE3, 0xED, 0x62, 0x80, 0x03, 0x18,
    0xF3, 0x73, 0x84, 0x00, 0x3C, 0x7D, 0xAD, 0x7D, 0xC3, 0x7D, 0xCF, 0x7D, 0xFD, 0xE5, 0xF1, 0xF5,
    0xE1, 0x6C, 0x81, 0x22, 0x64, 0x7D, 0xB7, 0xEF, 0xF2, 0xE7, 0xF2, 0xE5, 0xE1, 0xF4, 0xE5, 0x72,
    0x80, 0x22, 0xDA, 0xED, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80, 0xFF, 0x1C, 0x6F,
    0x02, 0x7D, 0xD5, 0x7D, 0xF2, 0x72, 0x02, 0x7D, 0xDB, 0x7D, 0xE8, 0xE5, 0xF1, 0xF5, 0xE9, 0xF6,
    0xE1, 0xEC, 0xE5, 0xEE, 0x74, 0x80, 0x22, 0x72, 0xE7, 0xF2, 0xE5, 0xE1, 0xF4, 0xE5, 0x72, 0x80,
    0x22, 0x76, 0xF6, 0xE5, 0xF2, 0xE5, 0xF1, 0xF5, 0xE1, 0x6C, 0x80, 0x22, 0x66, 0xF3, 0xED, 0xE1,
    0xEC, 0x6C, 0x80, 0xFE, 0x64, 0xFA, 0x68, 0x80, 0x02, 0x6E, 0xE6, 0xE2, 0xEC, 0xEF, 0xE3, 0x6B,
    0x80, 0x25, 0x8C, 0xE8, 0xEF, 0xEF, 0xEB, 0xF2, 0xE5, 0xF4, 0xF2, 0xEF, 0xE6, 0xEC, 0xE5, 0x78,
    0x80, 0x02, 0x6D, 0x69, 0x02, 0x7E, 0x29, 0x7E, 0x2E, 0xF2, 0x61, 0x80, 0x20, 0xA4, 0xF7, 0xEE,
    0xE1, 0xF2, 0xED, 0xE5, 0xEE, 0xE9, 0xE1, 0x6E, 0x80, 0x05, 0x6C, 0x6A, 0x81, 0x01, 0xC9, 0x7E,
    0x41, 0xE5, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x59, 0x6C, 0x84, 0xF6,
    0xC0, 0x7E, 0x59, 0x7E, 0x71, 0x7E, 0x7C, 0x7E, 0x85, 0x61, 0x02, 0x7E, 0x5F, 0x7E, 0x66, 0xE4,
    0xE5, 0xF6, 0x61, 0x80, 0x09, 0x33, 0xE7, 0xF5, 0xEA, 0xE1, 0xF2, 0xE1, 0xF4, 0x69, 0x80, 0x0A,
    0xB3, 0xE9, 0xEE, 0xE5, 0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E, 0x3B, 0xEC, 0xE1, 0xE4, 0xE5,
    0xF6, 0x61, 0x80, 0x09, 0x34, 0xF6, 0xEF, 0xE3, 0xE1, 0xEC, 0xE9, 0x63, 0x03, 0x7E, 0x93, 0x7E,
    0x9D, 0x7E, 0xA4, 0xE2, 0xE5, 0xEE, 0xE7, 0xE1, 0xEC, 0x69, 0x80, 0x09, 0xE1, 0xE4, 0xE5, 0xF6,
    0x61, 0x80, 0x09, 0x61, 0xF6, 0xEF, 0xF7, 0xE5, 0xEC, 0xF3, 0xE9, 0xE7, 0x6E, 0x02, 0x7E, 0xB2,
    0x7E, 0xBC, 0xE2, 0xE5, 0xEE, 0xE7, 0xE1, 0xEC, 0x69, 0x80, 0x09, 0xE3, 0xE4, 0xE5, 0xF6, 0x61,
    0x80, 0x09, 0x63, 0x6D, 0x03, 0x7E, 0xCB, 0x7E, 0xD8, 0x7E, 0xE3, 0xE9, 0xE4, 0xE4, 0xEC, 0xE5,
    0xF4, 0xE9, 0xEC, 0xE4, 0x65, 0x80, 0x02, 0x6B, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65,
    0x80, 0xFF, 0x4C, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0xD0, 0x6F, 0x06, 0x7E, 0xFA,
    0x7F, 0x06, 0x7F, 0x30, 0x7F, 0x3B, 0x7F, 0x41, 0x7F, 0x6B, 0xE3, 0xE8, 0xF5, 0xEC, 0xE1, 0xF4,
    0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x2C, 0xE7, 0xE9, 0xE3, 0xE1, 0x6C, 0x03, 0x7F, 0x12, 0x7F, 0x18,
    0x7F, 0x2B, 0xE1, 0xEE, 0x64, 0x80, 0x22, 0x27, 0xEE, 0xEF, 0x74, 0x81, 0x00, 0xAC, 0x7F, 0x20,
    0xF2, 0xE5, 0xF6, 0xE5, 0xF2, 0xF3, 0xE5, 0x64, 0x80, 0x23, 0x10, 0xEF, 0x72, 0x80, 0x22, 0x28,
    0xEC, 0xE9, 0xEE, 0xE7, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x25, 0xEE, 0xE7, 0x73, 0x80, 0x01,
    0x7F, 0xF7, 0xEC, 0xE9, 0xEE, 0x65, 0x02, 0x7F, 0x4B, 0x7F, 0x62, 0x63, 0x02, 0x7F, 0x51, 0x7F,
    0x5D, 0xE5, 0xEE, 0xF4, 0xE5, 0xF2, 0xEC, 0xE9, 0xEE, 0x65, 0x80, 0xFE, 0x4E, 0xED, 0x62, 0x80,
    0x03, 0x32, 0xE4, 0xE1, 0xF3, 0xE8, 0xE5, 0x64, 0x80, 0xFE, 0x4D, 0xFA, 0xE5, 0xEE, 0xE7, 0x65,
    0x80, 0x25, 0xCA, 0xF0, 0xE1, 0xF2, 0xE5, 0x6E, 0x80, 0x24, 0xA7, 0x73, 0x03, 0x7F, 0x83, 0x7F,
    0x8A, 0x7F, 0x92, 0xEC, 0xE1, 0xF3, 0x68, 0x80, 0x01, 0x42, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80,
    0x21, 0x13, 0xF5, 0xF0, 0xE5, 0xF2, 0xE9, 0xEF, 0x72, 0x80, 0xF6, 0xEE, 0xF4, 0xF3, 0xE8, 0xE1,
    0xE4, 0x65, 0x80, 0x25, 0x91, 0xF5, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x26, 0xF6, 0xEF, 0xE3,
    0xE1, 0xEC, 0xE9, 0x63, 0x03, 0x7F, 0xBB, 0x7F, 0xC5, 0x7F, 0xCC, 0xE2, 0xE5, 0xEE, 0xE7, 0xE1,
    0xEC, 0x69, 0x80, 0x09, 0x8C, 0xE4, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x0C, 0xF6, 0xEF, 0xF7, 0xE5,
    0xEC, 0xF3, 0xE9, 0xE7, 0x6E, 0x02, 0x7F, 0xDA, 0x7F, 0xE4, 0xE2, 0xE5, 0xEE, 0xE7, 0xE1, 0xEC,
    0x69, 0x80, 0x09, 0xE2, 0xE4, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x62, 0xF8, 0xF3, 0xF1, 0xF5, 0xE1,
    0xF2, 0x65, 0x80, 0x33, 0xD3, 0x6D, 0x90, 0x00, 0x6D, 0x80, 0x19, 0x82, 0x86, 0x82, 0x9F, 0x82,
    0xBA, 0x82, 0xD3, 0x84, 0x08, 0x84, 0x1E, 0x85, 0x55, 0x85, 0x73, 0x85, 0xA4, 0x86, 0x0F, 0x86,
    0x25, 0x86, 0x3E, 0x86, 0x47, 0x87, 0x62, 0x87, 0x7E, 0x61, 0x0C, 0x80, 0x33, 0x80, 0x3D, 0x80,
    0x7D, 0x80, 0x84, 0x80, 0x9D, 0x80, 0xCD, 0x82, 0x29, 0x82, 0x42, 0x82, 0x47, 0x82, 0x55, 0x82,
    0x61, 0x82, 0x66, 0xE2, 0xE5, 0xEE, 0xE7, 0xE1, 0xEC, 0x69, 0x80, 0x09, 0xAE, 0x63, 0x02, 0x80,
    0x43, 0x80, 0x77, 0xF2, 0xEF, 0x6E, 0x84, 0x00, 0xAF, 0x80, 0x51, 0x80, 0x5C, 0x80, 0x62, 0x80,
    0x6B, 0xE2, 0xE5, 0xEC, 0xEF, 0xF7, 0xE3, 0xED, 0x62, 0x80, 0x03, 0x31, 0xE3, 0xED, 0x62, 0x80,
    0x03, 0x04, 0xEC, 0xEF, 0xF7, 0xED, 0xEF, 0x64, 0x80, 0x02, 0xCD, 0xED, 0xEF, 0xEE, 0xEF, 0xF3,
    0xF0, 0xE1, 0xE3, 0x65, 0x80, 0xFF, 0xE3, 0xF5, 0xF4, 0x65, 0x80, 0x1E, 0x3F, 0xE4, 0xE5, 0xF6,
    0x61, 0x80, 0x09, 0x2E, 0xE7, 0x75, 0x02, 0x80, 0x8B, 0x80, 0x94, 0xEA, 0xE1, 0xF2, 0xE1, 0xF4,
    0x69, 0x80, 0x0A, 0xAE, 0xF2, 0xED, 0xF5, 0xEB, 0xE8, 0x69, 0x80, 0x0A, 0x2E, 0x68, 0x02, 0x80,
    0xA3, 0x80, 0xC3, 0xE1, 0xF0, 0xE1, 0xEB, 0x68, 0x02, 0x80, 0xAD, 0x80, 0xB6, 0xE8, 0xE5, 0xE2,
    0xF2, 0xE5, 0x77, 0x80, 0x05, 0xA4, 0xEC, 0xE5, 0xE6, 0xF4, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77,
    0x80, 0x05, 0xA4, 0xE9, 0xF2, 0xE1, 0xE7, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0x7E, 0x69, 0x05, 0x80,
    0xD9, 0x81, 0x1E, 0x81, 0x5D, 0x81, 0x7B, 0x82, 0x1D, 0xE3, 0xE8, 0xE1, 0xF4, 0xF4, 0xE1, 0xF7,
    0x61, 0x03, 0x80, 0xE8, 0x81, 0x07, 0x81, 0x0E, 0xEC, 0xEF, 0x77, 0x02, 0x80, 0xF0, 0x80, 0xFB,
    0xEC, 0xE5, 0xE6, 0xF4, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0xF8, 0x95, 0xF2, 0xE9, 0xE7, 0xE8, 0xF4,
    0xF4, 0xE8, 0xE1, 0x69, 0x80, 0xF8, 0x94, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x4B, 0xF5, 0xF0,
    0xF0, 0xE5, 0xF2, 0xEC, 0xE5, 0xE6, 0xF4, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0xF8, 0x93, 0xE5, 0x6B,
    0x03, 0x81, 0x27, 0x81, 0x46, 0x81, 0x4D, 0xEC, 0xEF, 0x77, 0x02, 0x81, 0x2F, 0x81, 0x3A, 0xEC,
    0xE5, 0xE6, 0xF4, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0xF8, 0x8C, 0xF2, 0xE9, 0xE7, 0xE8, 0xF4, 0xF4,
    0xE8, 0xE1, 0x69, 0x80, 0xF8, 0x8B, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x48, 0xF5, 0xF0, 0xF0,
    0xE5, 0xF2, 0xEC, 0xE5, 0xE6, 0xF4, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0xF8, 0x8A, 0xE8, 0xE1, 0xEE,
    0xE1, 0xEB, 0xE1, 0x74, 0x02, 0x81, 0x69, 0x81, 0x74, 0xEC, 0xE5, 0xE6, 0xF4, 0xF4, 0xE8, 0xE1,
    0x69, 0x80, 0xF8, 0x84, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x31, 0x74, 0x03, 0x81, 0x83, 0x81,
    0x9F, 0x81, 0xDE, 0xE1, 0xE9, 0xEB, 0xE8, 0x75, 0x02, 0x81, 0x8D, 0x81, 0x98, 0xEC, 0xE5, 0xE6,
    0xF4, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0xF8, 0x89, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x47, 0xE8,
    0x6F, 0x03, 0x81, 0xA8, 0x81, 0xC7, 0x81, 0xCE, 0xEC, 0xEF, 0x77, 0x02, 0x81, 0xB0, 0x81, 0xBB,
    0xEC, 0xE5, 0xE6, 0xF4, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0xF8, 0x8F, 0xF2, 0xE9, 0xE7, 0xE8, 0xF4,
    0xF4, 0xE8, 0xE1, 0x69, 0x80, 0xF8, 0x8E, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x49, 0xF5, 0xF0,
    0xF0, 0xE5, 0xF2, 0xEC, 0xE5, 0xE6, 0xF4, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0xF8, 0x8D, 0xF2, 0x69,
    0x03, 0x81, 0xE7, 0x82, 0x06, 0x82, 0x0D, 0xEC, 0xEF, 0x77, 0x02, 0x81, 0xEF, 0x81, 0xFA, 0xEC,
    0xE5, 0xE6, 0xF4, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0xF8, 0x92, 0xF2, 0xE9, 0xE7, 0xE8, 0xF4, 0xF4,
    0xE8, 0xE1, 0x69, 0x80, 0xF8, 0x91, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x4A, 0xF5, 0xF0, 0xF0,
    0xE5, 0xF2, 0xEC, 0xE5, 0xE6, 0xF4, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0xF8, 0x90, 0xF9, 0xE1, 0xED,
    0xEF, 0xEB, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x46, 0xEB, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1, 0xEE,
    0x61, 0x81, 0x30, 0xDE, 0x82, 0x36, 0xE8, 0xE1, 0xEC, 0xE6, 0xF7, 0xE9, 0xE4, 0xF4, 0x68, 0x80,
    0xFF, 0x8F, 0xEC, 0x65, 0x80, 0x26, 0x42, 0xEE, 0xF3, 0xF9, 0xEF, 0xEE, 0xF3, 0xF1, 0xF5, 0xE1,
    0xF2, 0x65, 0x80, 0x33, 0x47, 0xF1, 0xE1, 0xE6, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05,
    0xBE, 0xF2, 0x73, 0x80, 0x26, 0x42, 0x73, 0x02, 0x82, 0x6C, 0x82, 0x7E, 0xEF, 0xF2, 0xE1, 0xE3,
    0xE9, 0xF2, 0xE3, 0xEC, 0xE5, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xAF, 0xF1, 0xF5,
    0xE1, 0xF2, 0x65, 0x80, 0x33, 0x83, 0x62, 0x02, 0x82, 0x8C, 0x82, 0x96, 0xEF, 0xF0, 0xEF, 0xED,
    0xEF, 0xE6, 0x6F, 0x80, 0x31, 0x07, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0xD4, 0x63,
    0x02, 0x82, 0xA5, 0x82, 0xAD, 0xE9, 0xF2, 0xE3, 0xEC, 0x65, 0x80, 0x24, 0xDC, 0xF5, 0xE2, 0xE5,
    0xE4, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0xA5, 0xE4, 0xEF, 0x74, 0x02, 0x82, 0xC2,
    0x82, 0xCB, 0xE1, 0xE3, 0xE3, 0xE5, 0xEE, 0x74, 0x80, 0x1E, 0x41, 0xE2, 0xE5, 0xEC, 0xEF, 0x77,
    0x80, 0x1E, 0x43, 0x65, 0x07, 0x82, 0xE3, 0x83, 0x62, 0x83, 0x6D, 0x83, 0x7C, 0x83, 0x95, 0x83,
    0xBA, 0x83, 0xC6, 0x65, 0x02, 0x82, 0xE9, 0x83, 0x55, 0x6D, 0x04, 0x82, 0xF3, 0x82, 0xFC, 0x83,
    0x0A, 0x83, 0x1A, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0x06, 0x45, 0xE6, 0xE9, 0xEE, 0xE1,
    0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE, 0xE2, 0xE9, 0xEE, 0xE9, 0xF4, 0xE9, 0xE1,
    0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE, 0xE3, 0xED, 0x65, 0x02, 0x83, 0x21, 0x83,
    0x2E, 0xE4, 0xE9, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE, 0xE4, 0xE5, 0xED,
    0x69, 0x02, 0x83, 0x36, 0x83, 0x45, 0xEE, 0xE9, 0xF4, 0xE9, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2,
    0xE9, 0x63, 0x80, 0xFC, 0xD1, 0xF3, 0xEF, 0xEC, 0xE1, 0xF4, 0xE5, 0xE4, 0xE1, 0xF2, 0xE1, 0xE2,
    0xE9, 0x63, 0x80, 0xFC, 0x48, 0xF4, 0xEF, 0xF2, 0xF5, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80,
    0x33, 0x4D, 0xE8, 0xE9, 0xF2, 0xE1, 0xE7, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0x81, 0xE9, 0xFA, 0xE9,
    0xE5, 0xF2, 0xE1, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0x7E, 0xEB, 0xE1, 0xF4, 0xE1,
    0xEB, 0xE1, 0xEE, 0x61, 0x81, 0x30, 0xE1, 0x83, 0x89, 0xE8, 0xE1, 0xEC, 0xE6, 0xF7, 0xE9, 0xE4,
    0xF4, 0x68, 0x80, 0xFF, 0x92, 0x6D, 0x82, 0x05, 0xDE, 0x83, 0x9D, 0x83, 0xB1, 0xE4, 0xE1, 0xE7,
    0xE5, 0xF3, 0x68, 0x81, 0xFB, 0x3E, 0x83, 0xA8, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0xFB,
    0x3E, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xDE, 0xEE, 0xE1, 0xF2, 0xED, 0xE5, 0xEE,
    0xE9, 0xE1, 0x6E, 0x80, 0x05, 0x74, 0xF2, 0xEB, 0xE8, 0x61, 0x03, 0x83, 0xD1, 0x83, 0xDA, 0x83,
    0xFB, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xA5, 0xEB, 0xE5, 0xE6, 0xF5, 0xEC, 0x61,
    0x02, 0x83, 0xE5, 0x83, 0xEE, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xA6, 0xEC, 0xE5,
    0xE6, 0xF4, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xA6, 0xEC, 0xE5, 0xE6, 0xF4, 0xE8,
    0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xA5, 0x68, 0x02, 0x84, 0x0E, 0x84, 0x14, 0xEF, 0xEF,
    0x6B, 0x80, 0x02, 0x71, 0xFA, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0x92, 0x69, 0x06,
    0x84, 0x2C, 0x84, 0x51, 0x84, 0xDA, 0x84, 0xE5, 0x84, 0xFE, 0x85, 0x37, 0xE4, 0x64, 0x02, 0x84,
    0x33, 0x84, 0x4C, 0xEC, 0xE5, 0xE4, 0xEF, 0xF4, 0xEB, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1, 0xEE, 0xE1,
    0xE8, 0xE1, 0xEC, 0xE6, 0xF7, 0xE9, 0xE4, 0xF4, 0x68, 0x80, 0xFF, 0x65, 0xEF, 0x74, 0x80, 0x00,
    0xB7, 0xE5, 0xF5, 0x6D, 0x05, 0x84, 0x5F, 0x84, 0x82, 0x84, 0x91, 0x84, 0x9A, 0x84, 0xCD, 0x61,
    0x02, 0x84, 0x65, 0x84, 0x74, 0xE3, 0xE9, 0xF2, 0xE3, 0xEC, 0xE5, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1,
    0x6E, 0x80, 0x32, 0x72, 0xF0, 0xE1, 0xF2, 0xE5, 0xEE, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80,
    0x32, 0x12, 0xE3, 0xE9, 0xF2, 0xE3, 0xEC, 0xE5, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x32,
    0x64, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31, 0x41, 0x70, 0x02, 0x84, 0xA0, 0x84, 0xC0,
    0x61, 0x02, 0x84, 0xA6, 0x84, 0xB4, 0xEE, 0xF3, 0xE9, 0xEF, 0xF3, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1,
    0x6E, 0x80, 0x31, 0x70, 0xF2, 0xE5, 0xEE, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x32, 0x04,
    0xE9, 0xE5, 0xF5, 0xF0, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31, 0x6E, 0xF3, 0xE9, 0xEF,
    0xF3, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31, 0x6F, 0xE8, 0xE9, 0xF2, 0xE1, 0xE7, 0xE1,
    0xEE, 0x61, 0x80, 0x30, 0x7F, 0xEB, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1, 0xEE, 0x61, 0x81, 0x30, 0xDF,
    0x84, 0xF2, 0xE8, 0xE1, 0xEC, 0xE6, 0xF7, 0xE9, 0xE4, 0xF4, 0x68, 0x80, 0xFF, 0x90, 0xEE, 0x75,
    0x02, 0x85, 0x05, 0x85, 0x32, 0x73, 0x84, 0x22, 0x12, 0x85, 0x11, 0x85, 0x1C, 0x85, 0x25, 0x85,
    0x2B, 0xE2, 0xE5, 0xEC, 0xEF, 0xF7, 0xE3, 0xED, 0x62, 0x80, 0x03, 0x20, 0xE3, 0xE9, 0xF2, 0xE3,
    0xEC, 0x65, 0x80, 0x22, 0x96, 0xED, 0xEF, 0x64, 0x80, 0x02, 0xD7, 0xF0, 0xEC, 0xF5, 0x73, 0x80,
    0x22, 0x13, 0xF4, 0x65, 0x80, 0x20, 0x32, 0xF2, 0x69, 0x02, 0x85, 0x3E, 0x85, 0x4C, 0xE2, 0xE1,
    0xE1, 0xF2, 0xF5, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0x4A, 0xF3, 0xF1, 0xF5, 0xE1,
    0xF2, 0x65, 0x80, 0x33, 0x49, 0x6C, 0x02, 0x85, 0x5B, 0x85, 0x6A, 0xEF, 0xEE, 0xE7, 0xEC, 0xE5,
    0xE7, 0xF4, 0xF5, 0xF2, 0xEE, 0xE5, 0x64, 0x80, 0x02, 0x70, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65,
    0x80, 0x33, 0x96, 0x6D, 0x03, 0x85, 0x7B, 0x85, 0x89, 0x85, 0x94, 0xE3, 0xF5, 0xE2, 0xE5, 0xE4,
    0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0xA3, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3,
    0x65, 0x80, 0xFF, 0x4D, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0xE5, 0xE4, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2,
    0x65, 0x80, 0x33, 0x9F, 0x6F, 0x05, 0x85, 0xB0, 0x85, 0xCA, 0x85, 0xE3, 0x85, 0xED, 0x85, 0xF6,
    0x68, 0x02, 0x85, 0xB6, 0x85, 0xC0, 0xE9, 0xF2, 0xE1, 0xE7, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0x82,
    0xED, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0xC1, 0xEB, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1,
    0xEE, 0x61, 0x81, 0x30, 0xE2, 0x85, 0xD7, 0xE8, 0xE1, 0xEC, 0xE6, 0xF7, 0xE9, 0xE4, 0xF4, 0x68,
    0x80, 0xFF, 0x93, 0xEC, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0xD6, 0xED, 0xE1, 0xF4,
    0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x21, 0xF6, 0xE5, 0xF2, 0xF3, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65,
    0x81, 0x33, 0xA7, 0x86, 0x05, 0xE4, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0xA8, 0xF0,
    0x61, 0x02, 0x86, 0x16, 0x86, 0x1C, 0xF2, 0xE5, 0x6E, 0x80, 0x24, 0xA8, 0xF3, 0xF1, 0xF5, 0xE1,
    0xF2, 0x65, 0x80, 0x33, 0xAB, 0x73, 0x02, 0x86, 0x2B, 0x86, 0x34, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2,
    0x65, 0x80, 0x33, 0xB3, 0xF5, 0xF0, 0xE5, 0xF2, 0xE9, 0xEF, 0x72, 0x80, 0xF6, 0xEF, 0xF4, 0xF5,
    0xF2, 0xEE, 0xE5, 0x64, 0x80, 0x02, 0x6F, 0x75, 0x8D, 0x00, 0xB5, 0x86, 0x65, 0x86, 0x69, 0x86,
    0x73, 0x86, 0x8B, 0x86, 0x95, 0x86, 0xAB, 0x86, 0xB6, 0x86, 0xCF, 0x86, 0xE6, 0x86, 0xF0, 0x87,
    0x0E, 0x87, 0x4E, 0x87, 0x58, 0x31, 0x80, 0x00, 0xB5, 0xE1, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65,
    0x80, 0x33, 0x82, 0xE3, 0x68, 0x02, 0x86, 0x7A, 0x86, 0x84, 0xE7, 0xF2, 0xE5, 0xE1, 0xF4, 0xE5,
    0x72, 0x80, 0x22, 0x6B, 0xEC, 0xE5, 0xF3, 0x73, 0x80, 0x22, 0x6A, 0xE6, 0xF3, 0xF1, 0xF5, 0xE1,
    0xF2, 0x65, 0x80, 0x33, 0x8C, 0x67, 0x02, 0x86, 0x9B, 0x86, 0xA2, 0xF2, 0xE5, 0xE5, 0x6B, 0x80,
    0x03, 0xBC, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0x8D, 0xE8, 0xE9, 0xF2, 0xE1, 0xE7,
    0xE1, 0xEE, 0x61, 0x80, 0x30, 0x80, 0xEB, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1, 0xEE, 0x61, 0x81, 0x30,
    0xE0, 0x86, 0xC3, 0xE8, 0xE1, 0xEC, 0xE6, 0xF7, 0xE9, 0xE4, 0xF4, 0x68, 0x80, 0xFF, 0x91, 0x6C,
    0x02, 0x86, 0xD5, 0x86, 0xDE, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0x95, 0xF4, 0xE9,
    0xF0, 0xEC, 0x79, 0x80, 0x00, 0xD7, 0xED, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0x9B,
    0xEE, 0xE1, 0x68, 0x02, 0x86, 0xF8, 0x87, 0x01, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05,
    0xA3, 0xEC, 0xE5, 0xE6, 0xF4, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xA3, 0x73, 0x02,
    0x87, 0x14, 0x87, 0x45, 0xE9, 0x63, 0x03, 0x87, 0x1D, 0x87, 0x2E, 0x87, 0x39, 0xE1, 0xEC, 0xEE,
    0xEF, 0xF4, 0x65, 0x81, 0x26, 0x6A, 0x87, 0x28, 0xE4, 0xE2, 0x6C, 0x80, 0x26, 0x6B, 0xE6, 0xEC,
    0xE1, 0xF4, 0xF3, 0xE9, 0xE7, 0x6E, 0x80, 0x26, 0x6D, 0xF3, 0xE8, 0xE1, 0xF2, 0xF0, 0xF3, 0xE9,
    0xE7, 0x6E, 0x80, 0x26, 0x6F, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0xB2, 0xF6, 0xF3,
    0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0xB6, 0xF7, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80,
    0x33, 0xBC, 0x76, 0x02, 0x87, 0x68, 0x87, 0x75, 0xED, 0xE5, 0xE7, 0xE1, 0xF3, 0xF1, 0xF5, 0xE1,
    0xF2, 0x65, 0x80, 0x33, 0xB9, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0xB7, 0x77, 0x02,
    0x87, 0x84, 0x87, 0x91, 0xED, 0xE5, 0xE7, 0xE1, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33,
    0xBF, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0xBD, 0x6E, 0x96, 0x00, 0x6E, 0x87, 0xCA,
    0x88, 0x50, 0x88, 0x68, 0x88, 0xAA, 0x88, 0xC3, 0x88, 0xFD, 0x89, 0x07, 0x89, 0x4A, 0x89, 0x75,
    0x8B, 0x97, 0x8B, 0xA9, 0x8B, 0xC2, 0x8B, 0xE1, 0x8B, 0xFB, 0x8C, 0x3C, 0x8E, 0x2A, 0x8E, 0x32,
    0x8E, 0x4B, 0x8E, 0x53, 0x8F, 0x33, 0x8F, 0x3D, 0x8F, 0x47, 0x61, 0x08, 0x87, 0xDC, 0x87, 0xF0,
    0x87, 0xF7, 0x87, 0xFE, 0x88, 0x17, 0x88, 0x22, 0x88, 0x3B, 0x88, 0x47, 0x62, 0x02, 0x87, 0xE2,
    0x87, 0xEB, 0xE5, 0xEE, 0xE7, 0xE1, 0xEC, 0x69, 0x80, 0x09, 0xA8, 0xEC, 0x61, 0x80, 0x22, 0x07,
    0xE3, 0xF5, 0xF4, 0x65, 0x80, 0x01, 0x44, 0xE4, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x28, 0xE7, 0x75,
    0x02, 0x88, 0x05, 0x88, 0x0E, 0xEA, 0xE1, 0xF2, 0xE1, 0xF4, 0x69, 0x80, 0x0A, 0xA8, 0xF2, 0xED,
    0xF5, 0xEB, 0xE8, 0x69, 0x80, 0x0A, 0x28, 0xE8, 0xE9, 0xF2, 0xE1, 0xE7, 0xE1, 0xEE, 0x61, 0x80,
    0x30, 0x6A, 0xEB, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1, 0xEE, 0x61, 0x81, 0x30, 0xCA, 0x88, 0x2F, 0xE8,
    0xE1, 0xEC, 0xE6, 0xF7, 0xE9, 0xE4, 0xF4, 0x68, 0x80, 0xFF, 0x85, 0xF0, 0xEF, 0xF3, 0xF4, 0xF2,
    0xEF, 0xF0, 0xE8, 0x65, 0x80, 0x01, 0x49, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0x81,
    0x62, 0x02, 0x88, 0x56, 0x88, 0x60, 0xEF, 0xF0, 0xEF, 0xED, 0xEF, 0xE6, 0x6F, 0x80, 0x31, 0x0B,
    0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80, 0x00, 0xA0, 0x63, 0x04, 0x88, 0x72, 0x88, 0x79, 0x88, 0x82,
    0x88, 0x9D, 0xE1, 0xF2, 0xEF, 0x6E, 0x80, 0x01, 0x48, 0xE5, 0xE4, 0xE9, 0xEC, 0xEC, 0x61, 0x80,
    0x01, 0x46, 0xE9, 0xF2, 0x63, 0x02, 0x88, 0x8A, 0x88, 0x8F, 0xEC, 0x65, 0x80, 0x24, 0xDD, 0xF5,
    0xED, 0xE6, 0xEC, 0xE5, 0xF8, 0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E, 0x4B, 0xEF, 0xED, 0xED,
    0xE1, 0xE1, 0xE3, 0xE3, 0xE5, 0xEE, 0x74, 0x80, 0x01, 0x46, 0xE4, 0xEF, 0x74, 0x02, 0x88, 0xB2,
    0x88, 0xBB, 0xE1, 0xE3, 0xE3, 0xE5, 0xEE, 0x74, 0x80, 0x1E, 0x45, 0xE2, 0xE5, 0xEC, 0xEF, 0x77,
    0x80, 0x1E, 0x47, 0x65, 0x03, 0x88, 0xCB, 0x88, 0xD6, 0x88, 0xEF, 0xE8, 0xE9, 0xF2, 0xE1, 0xE7,
    0xE1, 0xEE, 0x61, 0x80, 0x30, 0x6D, 0xEB, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1, 0xEE, 0x61, 0x81, 0x30,
    0xCD, 0x88, 0xE3, 0xE8, 0xE1, 0xEC, 0xE6, 0xF7, 0xE9, 0xE4, 0xF4, 0x68, 0x80, 0xFF, 0x88, 0xF7,
    0xF3, 0xE8, 0xE5, 0xF1, 0xE5, 0xEC, 0xF3, 0xE9, 0xE7, 0x6E, 0x80, 0x20, 0xAA, 0xE6, 0xF3, 0xF1,
    0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0x8B, 0x67, 0x02, 0x89, 0x0D, 0x89, 0x3F, 0x61, 0x03, 0x89,
    0x15, 0x89, 0x1F, 0x89, 0x26, 0xE2, 0xE5, 0xEE, 0xE7, 0xE1, 0xEC, 0x69, 0x80, 0x09, 0x99, 0xE4,
    0xE5, 0xF6, 0x61, 0x80, 0x09, 0x19, 0xE7, 0x75, 0x02, 0x89, 0x2D, 0x89, 0x36, 0xEA, 0xE1, 0xF2,
    0xE1, 0xF4, 0x69, 0x80, 0x0A, 0x99, 0xF2, 0xED, 0xF5, 0xEB, 0xE8, 0x69, 0x80, 0x0A, 0x19, 0xEF,
    0xEE, 0xE7, 0xF5, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x07, 0x68, 0x02, 0x89, 0x50, 0x89, 0x5A,
    0xE9, 0xF2, 0xE1, 0xE7, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0x93, 0xEF, 0xEF, 0x6B, 0x02, 0x89, 0x62,
    0x89, 0x69, 0xEC, 0xE5, 0xE6, 0x74, 0x80, 0x02, 0x72, 0xF2, 0xE5, 0xF4, 0xF2, 0xEF, 0xE6, 0xEC,
    0xE5, 0x78, 0x80, 0x02, 0x73, 0x69, 0x04, 0x89, 0x7F, 0x8A, 0x28, 0x8A, 0x33, 0x8A, 0x6D, 0xE5,
    0xF5, 0x6E, 0x07, 0x89, 0x91, 0x89, 0xB4, 0x89, 0xD4, 0x89, 0xE2, 0x89, 0xEB, 0x8A, 0x0C, 0x8A,
    0x19, 0x61, 0x02, 0x89, 0x97, 0x89, 0xA6, 0xE3, 0xE9, 0xF2, 0xE3, 0xEC, 0xE5, 0xEB, 0xEF, 0xF2,
    0xE5, 0xE1, 0x6E, 0x80, 0x32, 0x6F, 0xF0, 0xE1, 0xF2, 0xE5, 0xEE, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1,
    0x6E, 0x80, 0x32, 0x0F, 0xE3, 0x69, 0x02, 0x89, 0xBB, 0x89, 0xC7, 0xE5, 0xF5, 0xE3, 0xEB, 0xEF,
    0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31, 0x35, 0xF2, 0xE3, 0xEC, 0xE5, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1,
    0x6E, 0x80, 0x32, 0x61, 0xE8, 0xE9, 0xE5, 0xF5, 0xE8, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80,
    0x31, 0x36, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31, 0x34, 0xF0, 0x61, 0x02, 0x89, 0xF2,
    0x8A, 0x00, 0xEE, 0xF3, 0xE9, 0xEF, 0xF3, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31, 0x68,
    0xF2, 0xE5, 0xEE, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x32, 0x01, 0xF3, 0xE9, 0xEF, 0xF3,
    0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31, 0x67, 0xF4, 0xE9, 0xEB, 0xE5, 0xF5, 0xF4, 0xEB,
    0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31, 0x66, 0xE8, 0xE9, 0xF2, 0xE1, 0xE7, 0xE1, 0xEE, 0x61,
    0x80, 0x30, 0x6B, 0x6B, 0x02, 0x8A, 0x39, 0x8A, 0x51, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1, 0xEE, 0x61,
    0x81, 0x30, 0xCB, 0x8A, 0x45, 0xE8, 0xE1, 0xEC, 0xE6, 0xF7, 0xE9, 0xE4, 0xF4, 0x68, 0x80, 0xFF,
    0x86, 0xE8, 0xE1, 0xE8, 0xE9, 0x74, 0x02, 0x8A, 0x5B, 0x8A, 0x66, 0xEC, 0xE5, 0xE6, 0xF4, 0xF4,
    0xE8, 0xE1, 0x69, 0x80, 0xF8, 0x99, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x4D, 0xEE, 0x65, 0x8D,
    0x00, 0x39, 0x8A, 0x8C, 0x8A, 0x95, 0x8A, 0x9F, 0x8A, 0xBD, 0x8A, 0xC4, 0x8A, 0xDD, 0x8A, 0xF8,
    0x8B, 0x1A, 0x8B, 0x26, 0x8B, 0x31, 0x8B, 0x52, 0x8B, 0x5A, 0x8B, 0x65, 0xE1, 0xF2, 0xE1, 0xE2,
    0xE9, 0x63, 0x80, 0x06, 0x69, 0xE2, 0xE5, 0xEE, 0xE7, 0xE1, 0xEC, 0x69, 0x80, 0x09, 0xEF, 0xE3,
    0xE9, 0xF2, 0xE3, 0xEC, 0x65, 0x81, 0x24, 0x68, 0x8A, 0xAA, 0xE9, 0xEE, 0xF6, 0xE5, 0xF2, 0xF3,
    0xE5, 0xF3, 0xE1, 0xEE, 0xF3, 0xF3, 0xE5, 0xF2, 0xE9, 0x66, 0x80, 0x27, 0x92, 0xE4, 0xE5, 0xF6,
    0x61, 0x80, 0x09, 0x6F, 0xE7, 0x75, 0x02, 0x8A, 0xCB, 0x8A, 0xD4, 0xEA, 0xE1, 0xF2, 0xE1, 0xF4,
    0x69, 0x80, 0x0A, 0xEF, 0xF2, 0xED, 0xF5, 0xEB, 0xE8, 0x69, 0x80, 0x0A, 0x6F, 0xE8, 0x61, 0x02,
    0x8A, 0xE4, 0x8A, 0xEF, 0xE3, 0xEB, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0x06, 0x69, 0xEE,
    0xE7, 0xFA, 0xE8, 0xEF, 0x75, 0x80, 0x30, 0x29, 0x69, 0x02, 0x8A, 0xFE, 0x8B, 0x10, 0xE4, 0xE5,
    0xEF, 0xE7, 0xF2, 0xE1, 0xF0, 0xE8, 0xE9, 0xE3, 0xF0, 0xE1, 0xF2, 0xE5, 0x6E, 0x80, 0x32, 0x28,
    0xEE, 0xE6, 0xE5, 0xF2, 0xE9, 0xEF, 0x72, 0x80, 0x20, 0x89, 0xED, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0,
    0xE1, 0xE3, 0x65, 0x80, 0xFF, 0x19, 0xEF, 0xEC, 0xE4, 0xF3, 0xF4, 0xF9, 0xEC, 0x65, 0x80, 0xF7,
    0x39, 0x70, 0x02, 0x8B, 0x37, 0x8B, 0x3E, 0xE1, 0xF2, 0xE5, 0x6E, 0x80, 0x24, 0x7C, 0xE5, 0x72,
    0x02, 0x8B, 0x45, 0x8B, 0x4B, 0xE9, 0xEF, 0x64, 0x80, 0x24, 0x90, 0xF3, 0xE9, 0xE1, 0x6E, 0x80,
    0x06, 0xF9, 0xF2, 0xEF, 0xED, 0xE1, 0x6E, 0x80, 0x21, 0x78, 0xF3, 0xF5, 0xF0, 0xE5, 0xF2, 0xE9,
    0xEF, 0x72, 0x80, 0x20, 0x79, 0x74, 0x02, 0x8B, 0x6B, 0x8B, 0x91, 0xE5, 0xE5, 0x6E, 0x02, 0x8B,
    0x73, 0x8B, 0x7C, 0xE3, 0xE9, 0xF2, 0xE3, 0xEC, 0x65, 0x80, 0x24, 0x72, 0x70, 0x02, 0x8B, 0x82,
    0x8B, 0x89, 0xE1, 0xF2, 0xE5, 0x6E, 0x80, 0x24, 0x86, 0xE5, 0xF2, 0xE9, 0xEF, 0x64, 0x80, 0x24,
    0x9A, 0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x59, 0x6A, 0x81, 0x01, 0xCC, 0x8B, 0x9D, 0xE5, 0xE3, 0xF9,
    0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x5A, 0xEB, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1, 0xEE,
    0x61, 0x81, 0x30, 0xF3, 0x8B, 0xB6, 0xE8, 0xE1, 0xEC, 0xE6, 0xF7, 0xE9, 0xE4, 0xF4, 0x68, 0x80,
    0xFF, 0x9D, 0x6C, 0x02, 0x8B, 0xC8, 0x8B, 0xD6, 0xE5, 0xE7, 0xF2, 0xE9, 0xE7, 0xE8, 0xF4, 0xEC,
    0xEF, 0xEE, 0x67, 0x80, 0x01, 0x9E, 0xE9, 0xEE, 0xE5, 0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E,
    0x49, 0x6D, 0x02, 0x8B, 0xE7, 0x8B, 0xF2, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80,
    0xFF, 0x4E, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0x9A, 0x6E, 0x02, 0x8C, 0x01, 0x8C,
    0x33, 0x61, 0x03, 0x8C, 0x09, 0x8C, 0x13, 0x8C, 0x1A, 0xE2, 0xE5, 0xEE, 0xE7, 0xE1, 0xEC, 0x69,
    0x80, 0x09, 0xA3, 0xE4, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x23, 0xE7, 0x75, 0x02, 0x8C, 0x21, 0x8C,
    0x2A, 0xEA, 0xE1, 0xF2, 0xE1, 0xF4, 0x69, 0x80, 0x0A, 0xA3, 0xF2, 0xED, 0xF5, 0xEB, 0xE8, 0x69,
    0x80, 0x0A, 0x23, 0xEE, 0xE1, 0xE4, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x29, 0x6F, 0x06, 0x8C, 0x4A,
    0x8C, 0x55, 0x8C, 0x6E, 0x8C, 0x97, 0x8D, 0x67, 0x8E, 0x1E, 0xE8, 0xE9, 0xF2, 0xE1, 0xE7, 0xE1,
    0xEE, 0x61, 0x80, 0x30, 0x6E, 0xEB, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1, 0xEE, 0x61, 0x81, 0x30, 0xCE,
    0x8C, 0x62, 0xE8, 0xE1, 0xEC, 0xE6, 0xF7, 0xE9, 0xE4, 0xF4, 0x68, 0x80, 0xFF, 0x89, 0x6E, 0x03,
    0x8C, 0x76, 0x8C, 0x86, 0x8C, 0x8F, 0xE2, 0xF2, 0xE5, 0xE1, 0xEB, 0xE9, 0xEE, 0xE7, 0xF3, 0xF0,
    0xE1, 0xE3, 0x65, 0x80, 0x00, 0xA0, 0xE5, 0xEE, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x13, 0xF5,
    0xF4, 0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x19, 0xEF, 0x6E, 0x07, 0x8C, 0xA8, 0x8C, 0xB1, 0x8C, 0xBF,
    0x8C, 0xE1, 0x8C, 0xF1, 0x8D, 0x1A, 0x8D, 0x55, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0x06,
    0x46, 0xE6, 0xE9, 0xEE, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE, 0xE6, 0xE7,
    0xE8, 0xF5, 0xEE, 0xEE, 0x61, 0x02, 0x8C, 0xCA, 0x8C, 0xD3, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63,
    0x80, 0x06, 0xBA, 0xE6, 0xE9, 0xEE, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFB,
    0x9F, 0xE9, 0xEE, 0xE9, 0xF4, 0xE9, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE,
    0xE7, 0xEA, 0xE5, 0xE5, 0xED, 0x69, 0x02, 0x8C, 0xFB, 0x8D, 0x0A, 0xEE, 0xE9, 0xF4, 0xE9, 0xE1,
    0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFC, 0xD2, 0xF3, 0xEF, 0xEC, 0xE1, 0xF4, 0xE5,
    0xE4, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFC, 0x4B, 0xED, 0x65, 0x02, 0x8D, 0x21, 0x8D,
    0x2E, 0xE4, 0xE9, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE, 0xE8, 0xE5, 0xED,
    0x69, 0x02, 0x8D, 0x36, 0x8D, 0x45, 0xEE, 0xE9, 0xF4, 0xE9, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2,
    0xE9, 0x63, 0x80, 0xFC, 0xD5, 0xF3, 0xEF, 0xEC, 0xE1, 0xF4, 0xE5, 0xE4, 0xE1, 0xF2, 0xE1, 0xE2,
    0xE9, 0x63, 0x80, 0xFC, 0x4E, 0xEE, 0xEF, 0xEF, 0xEE, 0xE6, 0xE9, 0xEE, 0xE1, 0xEC, 0xE1, 0xF2,
    0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFC, 0x8D, 0x74, 0x07, 0x8D, 0x77, 0x8D, 0x82, 0x8D, 0x9F, 0x8D,
    0xC2, 0x8D, 0xCE, 0x8D, 0xE2, 0x8D, 0xFC, 0xE3, 0xEF, 0xEE, 0xF4, 0xE1, 0xE9, 0xEE, 0x73, 0x80,
    0x22, 0x0C, 0x65, 0x02, 0x8D, 0x88, 0x8D, 0x98, 0xEC, 0xE5, 0xED, 0xE5, 0xEE, 0x74, 0x81, 0x22,
    0x09, 0x8D, 0x93, 0xEF, 0x66, 0x80, 0x22, 0x09, 0xF1, 0xF5, 0xE1, 0x6C, 0x80, 0x22, 0x60, 0xE7,
    0xF2, 0xE5, 0xE1, 0xF4, 0xE5, 0x72, 0x81, 0x22, 0x6F, 0x8D, 0xAB, 0xEE, 0xEF, 0x72, 0x02, 0x8D,
    0xB3, 0x8D, 0xBB, 0xE5, 0xF1, 0xF5, 0xE1, 0x6C, 0x80, 0x22, 0x71, 0xEC, 0xE5, 0xF3, 0x73, 0x80,
    0x22, 0x79, 0xE9, 0xE4, 0xE5, 0xEE, 0xF4, 0xE9, 0xE3, 0xE1, 0x6C, 0x80, 0x22, 0x62, 0xEC, 0xE5,
    0xF3, 0x73, 0x81, 0x22, 0x6E, 0x8D, 0xD7, 0xEE, 0xEF, 0xF2, 0xE5, 0xF1, 0xF5, 0xE1, 0x6C, 0x80,
    0x22, 0x70, 0x70, 0x02, 0x8D, 0xE8, 0x8D, 0xF2, 0xE1, 0xF2, 0xE1, 0xEC, 0xEC, 0xE5, 0x6C, 0x80,
    0x22, 0x26, 0xF2, 0xE5, 0xE3, 0xE5, 0xE4, 0xE5, 0x73, 0x80, 0x22, 0x80, 0xF3, 0x75, 0x03, 0x8E,
    0x05, 0x8E, 0x0C, 0x8E, 0x15, 0xE2, 0xF3, 0xE5, 0x74, 0x80, 0x22, 0x84, 0xE3, 0xE3, 0xE5, 0xE5,
    0xE4, 0x73, 0x80, 0x22, 0x81, 0xF0, 0xE5, 0xF2, 0xF3, 0xE5, 0x74, 0x80, 0x22, 0x85, 0xF7, 0xE1,
    0xF2, 0xED, 0xE5, 0xEE, 0xE9, 0xE1, 0x6E, 0x80, 0x05, 0x76, 0xF0, 0xE1, 0xF2, 0xE5, 0x6E, 0x80,
    0x24, 0xA9, 0x73, 0x02, 0x8E, 0x38, 0x8E, 0x41, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33,
    0xB1, 0xF5, 0xF0, 0xE5, 0xF2, 0xE9, 0xEF, 0x72, 0x80, 0x20, 0x7F, 0xF4, 0xE9, 0xEC, 0xE4, 0x65,
    0x80, 0x00, 0xF1, 0x75, 0x84, 0x03, 0xBD, 0x8E, 0x5F, 0x8E, 0x6A, 0x8E, 0xBB, 0x8F, 0x0E, 0xE8,
    0xE9, 0xF2, 0xE1, 0xE7, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0x6C, 0x6B, 0x02, 0x8E, 0x70, 0x8E, 0x88,
    0xE1, 0xF4, 0xE1, 0xEB, 0xE1, 0xEE, 0x61, 0x81, 0x30, 0xCC, 0x8E, 0x7C, 0xE8, 0xE1, 0xEC, 0xE6,
    0xF7, 0xE9, 0xE4, 0xF4, 0x68, 0x80, 0xFF, 0x87, 0xF4, 0x61, 0x03, 0x8E, 0x91, 0x8E, 0x9B, 0x8E,
    0xA2, 0xE2, 0xE5, 0xEE, 0xE7, 0xE1, 0xEC, 0x69, 0x80, 0x09, 0xBC, 0xE4, 0xE5, 0xF6, 0x61, 0x80,
    0x09, 0x3C, 0xE7, 0x75, 0x02, 0x8E, 0xA9, 0x8E, 0xB2, 0xEA, 0xE1, 0xF2, 0xE1, 0xF4, 0x69, 0x80,
    0x0A, 0xBC, 0xF2, 0xED, 0xF5, 0xEB, 0xE8, 0x69, 0x80, 0x0A, 0x3C, 0x6D, 0x02, 0x8E, 0xC1, 0x8E,
    0xE3, 0xE2, 0xE5, 0xF2, 0xF3, 0xE9, 0xE7, 0x6E, 0x82, 0x00, 0x23, 0x8E, 0xCF, 0x8E, 0xDB, 0xED,
    0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80, 0xFF, 0x03, 0xF3, 0xED, 0xE1, 0xEC, 0x6C,
    0x80, 0xFE, 0x5F, 0xE5, 0x72, 0x02, 0x8E, 0xEA, 0x8F, 0x0A, 0xE1, 0xEC, 0xF3, 0xE9, 0xE7, 0x6E,
    0x02, 0x8E, 0xF5, 0x8E, 0xFD, 0xE7, 0xF2, 0xE5, 0xE5, 0x6B, 0x80, 0x03, 0x74, 0xEC, 0xEF, 0xF7,
    0xE5, 0xF2, 0xE7, 0xF2, 0xE5, 0xE5, 0x6B, 0x80, 0x03, 0x75, 0x6F, 0x80, 0x21, 0x16, 0x6E, 0x82,
    0x05, 0xE0, 0x8F, 0x16, 0x8F, 0x2A, 0xE4, 0xE1, 0xE7, 0xE5, 0xF3, 0x68, 0x81, 0xFB, 0x40, 0x8F,
    0x21, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0xFB, 0x40, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77,
    0x80, 0x05, 0xE0, 0xF6, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0xB5, 0xF7, 0xF3, 0xF1,
    0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0xBB, 0xF9, 0x61, 0x03, 0x8F, 0x50, 0x8F, 0x5A, 0x8F, 0x61,
    0xE2, 0xE5, 0xEE, 0xE7, 0xE1, 0xEC, 0x69, 0x80, 0x09, 0x9E, 0xE4, 0xE5, 0xF6, 0x61, 0x80, 0x09,
    0x1E, 0xE7, 0x75, 0x02, 0x8F, 0x68, 0x8F, 0x71, 0xEA, 0xE1, 0xF2, 0xE1, 0xF4, 0x69, 0x80, 0x0A,
    0x9E, 0xF2, 0xED, 0xF5, 0xEB, 0xE8, 0x69, 0x80, 0x0A, 0x1E, 0x6F, 0x93, 0x00, 0x6F, 0x8F, 0xA4,
    0x8F, 0xBA, 0x90, 0x08, 0x90, 0xB2, 0x90, 0xFA, 0x91, 0x09, 0x91, 0x31, 0x91, 0xAC, 0x91, 0xC1,
    0x91, 0xE7, 0x91, 0xF2, 0x92, 0xA4, 0x93, 0xFE, 0x94, 0x3E, 0x94, 0x5F, 0x94, 0x8D, 0x95, 0x0E,
    0x95, 0x3D, 0x95, 0x49, 0x61, 0x02, 0x8F, 0xAA, 0x8F, 0xB1, 0xE3, 0xF5, 0xF4, 0x65, 0x80, 0x00,
    0xF3, 0xEE, 0xE7, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x2D, 0x62, 0x04, 0x8F, 0xC4, 0x8F, 0xEE,
    0x8F, 0xF7, 0x90, 0x01, 0xE1, 0xF2, 0xF2, 0xE5, 0x64, 0x82, 0x02, 0x75, 0x8F, 0xD0, 0x8F, 0xDB,
    0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0xE9, 0xE4, 0xE9, 0xE5, 0xF2, 0xE5,
    0xF3, 0xE9, 0xF3, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0xEB, 0xE5, 0xEE,
    0xE7, 0xE1, 0xEC, 0x69, 0x80, 0x09, 0x93, 0xEF, 0xF0, 0xEF, 0xED, 0xEF, 0xE6, 0x6F, 0x80, 0x31,
    0x1B, 0xF2, 0xE5, 0xF6, 0x65, 0x80, 0x01, 0x4F, 0x63, 0x03, 0x90, 0x10, 0x90, 0x59, 0x90, 0xA8,
    0x61, 0x02, 0x90, 0x16, 0x90, 0x53, 0xEE, 0xE4, 0xF2, 0x61, 0x03, 0x90, 0x21, 0x90, 0x28, 0x90,
    0x33, 0xE4, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x11, 0xE7, 0xF5, 0xEA, 0xE1, 0xF2, 0xE1, 0xF4, 0x69,
    0x80, 0x0A, 0x91, 0xF6, 0xEF, 0xF7, 0xE5, 0xEC, 0xF3, 0xE9, 0xE7, 0x6E, 0x02, 0x90, 0x41, 0x90,
    0x48, 0xE4, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x49, 0xE7, 0xF5, 0xEA, 0xE1, 0xF2, 0xE1, 0xF4, 0x69,
    0x80, 0x0A, 0xC9, 0xF2, 0xEF, 0x6E, 0x80, 0x01, 0xD2, 0xE9, 0xF2, 0x63, 0x02, 0x90, 0x61, 0x90,
    0x66, 0xEC, 0x65, 0x80, 0x24, 0xDE, 0xF5, 0xED, 0xE6, 0xEC, 0xE5, 0x78, 0x85, 0x00, 0xF4, 0x90,
    0x79, 0x90, 0x81, 0x90, 0x8C, 0x90, 0x94, 0x90, 0xA0, 0xE1, 0xE3, 0xF5, 0xF4, 0x65, 0x80, 0x1E,
    0xD1, 0xE4, 0xEF, 0xF4, 0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E, 0xD9, 0xE7, 0xF2, 0xE1, 0xF6,
    0x65, 0x80, 0x1E, 0xD3, 0xE8, 0xEF, 0xEF, 0xEB, 0xE1, 0xE2, 0xEF, 0xF6, 0x65, 0x80, 0x1E, 0xD5,
    0xF4, 0xE9, 0xEC, 0xE4, 0x65, 0x80, 0x1E, 0xD7, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80,
    0x04, 0x3E, 0x64, 0x04, 0x90, 0xBC, 0x90, 0xD3, 0x90, 0xD9, 0x90, 0xF0, 0xE2, 0x6C, 0x02, 0x90,
    0xC3, 0x90, 0xCB, 0xE1, 0xE3, 0xF5, 0xF4, 0x65, 0x80, 0x01, 0x51, 0xE7, 0xF2, 0xE1, 0xF6, 0x65,
    0x80, 0x02, 0x0D, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x13, 0xE9, 0xE5, 0xF2, 0xE5, 0xF3, 0xE9, 0x73,
    0x81, 0x00, 0xF6, 0x90, 0xE5, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0xE7,
    0xEF, 0xF4, 0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E, 0xCD, 0x65, 0x81, 0x01, 0x53, 0x91, 0x00,
    0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31, 0x5A, 0x67, 0x03, 0x91, 0x11, 0x91, 0x20, 0x91,
    0x27, 0xEF, 0xEE, 0xE5, 0x6B, 0x81, 0x02, 0xDB, 0x91, 0x1A, 0xE3, 0xED, 0x62, 0x80, 0x03, 0x28,
    0xF2, 0xE1, 0xF6, 0x65, 0x80, 0x00, 0xF2, 0xF5, 0xEA, 0xE1, 0xF2, 0xE1, 0xF4, 0x69, 0x80, 0x0A,
    0x93, 0x68, 0x04, 0x91, 0x3B, 0x91, 0x46, 0x91, 0x50, 0x91, 0x9E, 0xE1, 0xF2, 0xED, 0xE5, 0xEE,
    0xE9, 0xE1, 0x6E, 0x80, 0x05, 0x85, 0xE9, 0xF2, 0xE1, 0xE7, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0x4A,
    0x6F, 0x02, 0x91, 0x56, 0x91, 0x60, 0xEF, 0xEB, 0xE1, 0xE2, 0xEF, 0xF6, 0x65, 0x80, 0x1E, 0xCF,
    0xF2, 0x6E, 0x85, 0x01, 0xA1, 0x91, 0x6F, 0x91, 0x77, 0x91, 0x82, 0x91, 0x8A, 0x91, 0x96, 0xE1,
    0xE3, 0xF5, 0xF4, 0x65, 0x80, 0x1E, 0xDB, 0xE4, 0xEF, 0xF4, 0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80,
    0x1E, 0xE3, 0xE7, 0xF2, 0xE1, 0xF6, 0x65, 0x80, 0x1E, 0xDD, 0xE8, 0xEF, 0xEF, 0xEB, 0xE1, 0xE2,
    0xEF, 0xF6, 0x65, 0x80, 0x1E, 0xDF, 0xF4, 0xE9, 0xEC, 0xE4, 0x65, 0x80, 0x1E, 0xE1, 0xF5, 0xEE,
    0xE7, 0xE1, 0xF2, 0xF5, 0xED, 0xEC, 0xE1, 0xF5, 0x74, 0x80, 0x01, 0x51, 0x69, 0x81, 0x01, 0xA3,
    0x91, 0xB2, 0xEE, 0xF6, 0xE5, 0xF2, 0xF4, 0xE5, 0xE4, 0xE2, 0xF2, 0xE5, 0xF6, 0x65, 0x80, 0x02,
    0x0F, 0x6B, 0x02, 0x91, 0xC7, 0x91, 0xDF, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1, 0xEE, 0x61, 0x81, 0x30,
    0xAA, 0x91, 0xD3, 0xE8, 0xE1, 0xEC, 0xE6, 0xF7, 0xE9, 0xE4, 0xF4, 0x68, 0x80, 0xFF, 0x75, 0xEF,
    0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31, 0x57, 0xEC, 0xE5, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80,
    0x05, 0xAB, 0x6D, 0x06, 0x92, 0x00, 0x92, 0x1C, 0x92, 0x23, 0x92, 0x7C, 0x92, 0x87, 0x92, 0x99,
    0xE1, 0xE3, 0xF2, 0xEF, 0x6E, 0x82, 0x01, 0x4D, 0x92, 0x0C, 0x92, 0x14, 0xE1, 0xE3, 0xF5, 0xF4,
    0x65, 0x80, 0x1E, 0x53, 0xE7, 0xF2, 0xE1, 0xF6, 0x65, 0x80, 0x1E, 0x51, 0xE4, 0xE5, 0xF6, 0x61,
    0x80, 0x09, 0x50, 0xE5, 0xE7, 0x61, 0x85, 0x03, 0xC9, 0x92, 0x33, 0x92, 0x37, 0x92, 0x42, 0x92,
    0x50, 0x92, 0x60, 0x31, 0x80, 0x03, 0xD6, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80,
    0x04, 0x61, 0xEC, 0xE1, 0xF4, 0xE9, 0xEE, 0xE3, 0xEC, 0xEF, 0xF3, 0xE5, 0x64, 0x80, 0x02, 0x77,
    0xF2, 0xEF, 0xF5, 0xEE, 0xE4, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x7B,
    0x74, 0x02, 0x92, 0x66, 0x92, 0x75, 0xE9, 0xF4, 0xEC, 0xEF, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC,
    0xE9, 0x63, 0x80, 0x04, 0x7D, 0xEF, 0xEE, 0xEF, 0x73, 0x80, 0x03, 0xCE, 0xE7, 0xF5, 0xEA, 0xE1,
    0xF2, 0xE1, 0xF4, 0x69, 0x80, 0x0A, 0xD0, 0xE9, 0xE3, 0xF2, 0xEF, 0x6E, 0x81, 0x03, 0xBF, 0x92,
    0x91, 0xF4, 0xEF, 0xEE, 0xEF, 0x73, 0x80, 0x03, 0xCC, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3,
    0x65, 0x80, 0xFF, 0x4F, 0xEE, 0x65, 0x91, 0x00, 0x31, 0x92, 0xCB, 0x92, 0xD4, 0x92, 0xDE, 0x92,
    0xFC, 0x93, 0x15, 0x93, 0x1E, 0x93, 0x27, 0x93, 0x40, 0x93, 0x62, 0x93, 0x84, 0x93, 0x90, 0x93,
    0xA3, 0x93, 0xAE, 0x93, 0xCF, 0x93, 0xD9, 0x93, 0xE1, 0x93, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9,
    0x63, 0x80, 0x06, 0x61, 0xE2, 0xE5, 0xEE, 0xE7, 0xE1, 0xEC, 0x69, 0x80, 0x09, 0xE7, 0xE3, 0xE9,
    0xF2, 0xE3, 0xEC, 0x65, 0x81, 0x24, 0x60, 0x92, 0xE9, 0xE9, 0xEE, 0xF6, 0xE5, 0xF2, 0xF3, 0xE5,
    0xF3, 0xE1, 0xEE, 0xF3, 0xF3, 0xE5, 0xF2, 0xE9, 0x66, 0x80, 0x27, 0x8A, 0x64, 0x02, 0x93, 0x02,
    0x93, 0x08, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x67, 0xEF, 0xF4, 0xE5, 0xEE, 0xEC, 0xE5, 0xE1, 0xE4,
    0xE5, 0x72, 0x80, 0x20, 0x24, 0xE5, 0xE9, 0xE7, 0xE8, 0xF4, 0x68, 0x80, 0x21, 0x5B, 0xE6, 0xE9,
    0xF4, 0xF4, 0xE5, 0x64, 0x80, 0xF6, 0xDC, 0xE7, 0x75, 0x02, 0x93, 0x2E, 0x93, 0x37, 0xEA, 0xE1,
    0xF2, 0xE1, 0xF4, 0x69, 0x80, 0x0A, 0xE7, 0xF2, 0xED, 0xF5, 0xEB, 0xE8, 0x69, 0x80, 0x0A, 0x67,
    0xE8, 0x61, 0x03, 0x93, 0x49, 0x93, 0x54, 0x93, 0x59, 0xE3, 0xEB, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9,
    0x63, 0x80, 0x06, 0x61, 0xEC, 0x66, 0x80, 0x00, 0xBD, 0xEE, 0xE7, 0xFA, 0xE8, 0xEF, 0x75, 0x80,
    0x30, 0x21, 0x69, 0x02, 0x93, 0x68, 0x93, 0x7A, 0xE4, 0xE5, 0xEF, 0xE7, 0xF2, 0xE1, 0xF0, 0xE8,
    0xE9, 0xE3, 0xF0, 0xE1, 0xF2, 0xE5, 0x6E, 0x80, 0x32, 0x20, 0xEE, 0xE6, 0xE5, 0xF2, 0xE9, 0xEF,
    0x72, 0x80, 0x20, 0x81, 0xED, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80, 0xFF, 0x11,
    0xEE, 0xF5, 0xED, 0xE5, 0xF2, 0xE1, 0xF4, 0xEF, 0xF2, 0xE2, 0xE5, 0xEE, 0xE7, 0xE1, 0xEC, 0x69,
    0x80, 0x09, 0xF4, 0xEF, 0xEC, 0xE4, 0xF3, 0xF4, 0xF9, 0xEC, 0x65, 0x80, 0xF7, 0x31, 0x70, 0x02,
    0x93, 0xB4, 0x93, 0xBB, 0xE1, 0xF2, 0xE5, 0x6E, 0x80, 0x24, 0x74, 0xE5, 0x72, 0x02, 0x93, 0xC2,
    0x93, 0xC8, 0xE9, 0xEF, 0x64, 0x80, 0x24, 0x88, 0xF3, 0xE9, 0xE1, 0x6E, 0x80, 0x06, 0xF1, 0xF1,
    0xF5, 0xE1, 0xF2, 0xF4, 0xE5, 0x72, 0x80, 0x00, 0xBC, 0xF2, 0xEF, 0xED, 0xE1, 0x6E, 0x80, 0x21,
    0x70, 0xF3, 0xF5, 0xF0, 0xE5, 0xF2, 0xE9, 0xEF, 0x72, 0x80, 0x00, 0xB9, 0xF4, 0x68, 0x02, 0x93,
    0xF3, 0x93, 0xF8, 0xE1, 0x69, 0x80, 0x0E, 0x51, 0xE9, 0xF2, 0x64, 0x80, 0x21, 0x53, 0x6F, 0x03,
    0x94, 0x06, 0x94, 0x28, 0x94, 0x38, 0x67, 0x02, 0x94, 0x0C, 0x94, 0x1E, 0xEF, 0xEE, 0xE5, 0x6B,
    0x81, 0x01, 0xEB, 0x94, 0x15, 0xED, 0xE1, 0xE3, 0xF2, 0xEF, 0x6E, 0x80, 0x01, 0xED, 0xF5, 0xF2,
    0xED, 0xF5, 0xEB, 0xE8, 0x69, 0x80, 0x0A, 0x13, 0xED, 0xE1, 0xF4, 0xF2, 0xE1, 0xE7, 0xF5, 0xF2,
    0xED, 0xF5, 0xEB, 0xE8, 0x69, 0x80, 0x0A, 0x4B, 0xF0, 0xE5, 0x6E, 0x80, 0x02, 0x54, 0x70, 0x03,
    0x94, 0x46, 0x94, 0x4D, 0x94, 0x58, 0xE1, 0xF2, 0xE5, 0x6E, 0x80, 0x24, 0xAA, 0xE5, 0xEE, 0xE2,
    0xF5, 0xEC, 0xEC, 0xE5, 0x74, 0x80, 0x25, 0xE6, 0xF4, 0xE9, 0xEF, 0x6E, 0x80, 0x23, 0x25, 0x72,
    0x02, 0x94, 0x65, 0x94, 0x82, 0x64, 0x02, 0x94, 0x6B, 0x94, 0x76, 0xE6, 0xE5, 0xED, 0xE9, 0xEE,
    0xE9, 0xEE, 0x65, 0x80, 0x00, 0xAA, 0xED, 0xE1, 0xF3, 0xE3, 0xF5, 0xEC, 0xE9, 0xEE, 0x65, 0x80,
    0x00, 0xBA, 0xF4, 0xE8, 0xEF, 0xE7, 0xEF, 0xEE, 0xE1, 0x6C, 0x80, 0x22, 0x1F, 0x73, 0x05, 0x94,
    0x99, 0x94, 0xB9, 0x94, 0xCA, 0x94, 0xF7, 0x95, 0x04, 0xE8, 0xEF, 0xF2, 0x74, 0x02, 0x94, 0xA2,
    0x94, 0xA9, 0xE4, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x12, 0xF6, 0xEF, 0xF7, 0xE5, 0xEC, 0xF3, 0xE9,
    0xE7, 0xEE, 0xE4, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x4A, 0xEC, 0xE1, 0xF3, 0x68, 0x81, 0x00, 0xF8,
    0x94, 0xC2, 0xE1, 0xE3, 0xF5, 0xF4, 0x65, 0x80, 0x01, 0xFF, 0xED, 0xE1, 0xEC, 0x6C, 0x02, 0x94,
    0xD3, 0x94, 0xDE, 0xE8, 0xE9, 0xF2, 0xE1, 0xE7, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0x49, 0xEB, 0xE1,
    0xF4, 0xE1, 0xEB, 0xE1, 0xEE, 0x61, 0x81, 0x30, 0xA9, 0x94, 0xEB, 0xE8, 0xE1, 0xEC, 0xE6, 0xF7,
    0xE9, 0xE4, 0xF4, 0x68, 0x80, 0xFF, 0x6B, 0xF4, 0xF2, 0xEF, 0xEB, 0xE5, 0xE1, 0xE3, 0xF5, 0xF4,
    0x65, 0x80, 0x01, 0xFF, 0xF5, 0xF0, 0xE5, 0xF2, 0xE9, 0xEF, 0x72, 0x80, 0xF6, 0xF0, 0x74, 0x02,
    0x95, 0x14, 0x95, 0x1F, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x7F, 0xE9,
    0xEC, 0xE4, 0x65, 0x82, 0x00, 0xF5, 0x95, 0x2A, 0x95, 0x32, 0xE1, 0xE3, 0xF5, 0xF4, 0x65, 0x80,
    0x1E, 0x4D, 0xE4, 0xE9, 0xE5, 0xF2, 0xE5, 0xF3, 0xE9, 0x73, 0x80, 0x1E, 0x4F, 0xF5, 0xE2, 0xEF,
    0xF0, 0xEF, 0xED, 0xEF, 0xE6, 0x6F, 0x80, 0x31, 0x21, 0x76, 0x02, 0x95, 0x4F, 0x95, 0xA0, 0xE5,
    0x72, 0x02, 0x95, 0x56, 0x95, 0x98, 0xEC, 0xE9, 0xEE, 0x65, 0x83, 0x20, 0x3E, 0x95, 0x63, 0x95,
    0x7A, 0x95, 0x91, 0x63, 0x02, 0x95, 0x69, 0x95, 0x75, 0xE5, 0xEE, 0xF4, 0xE5, 0xF2, 0xEC, 0xE9,
    0xEE, 0x65, 0x80, 0xFE, 0x4A, 0xED, 0x62, 0x80, 0x03, 0x05, 0x64, 0x02, 0x95, 0x80, 0x95, 0x88,
    0xE1, 0xF3, 0xE8, 0xE5, 0x64, 0x80, 0xFE, 0x49, 0xE2, 0xEC, 0xF7, 0xE1, 0xF6, 0x79, 0x80, 0xFE,
    0x4C, 0xF7, 0xE1, 0xF6, 0x79, 0x80, 0xFE, 0x4B, 0xF3, 0xE3, 0xEF, 0xF2, 0x65, 0x80, 0x00, 0xAF,
    0xEF, 0xF7, 0xE5, 0xEC, 0xF3, 0xE9, 0xE7, 0x6E, 0x03, 0x95, 0xAF, 0x95, 0xB9, 0x95, 0xC0, 0xE2,
    0xE5, 0xEE, 0xE7, 0xE1, 0xEC, 0x69, 0x80, 0x09, 0xCB, 0xE4, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x4B,
    0xE7, 0xF5, 0xEA, 0xE1, 0xF2, 0xE1, 0xF4, 0x69, 0x80, 0x0A, 0xCB, 0x70, 0x91, 0x00, 0x70, 0x95,
    0xF1, 0x98, 0x71, 0x98, 0x7C, 0x98, 0x85, 0x98, 0x91, 0x9A, 0x46, 0x9A, 0x50, 0x9B, 0x48, 0x9C,
    0x5B, 0x9C, 0xB5, 0x9C, 0xCF, 0x9D, 0x52, 0x9D, 0x5A, 0x9D, 0xF8, 0x9E, 0x32, 0x9E, 0x4E, 0x9E,
    0x58, 0x61, 0x0E, 0x96, 0x0F, 0x96, 0x2F, 0x96, 0x39, 0x96, 0x40, 0x96, 0x47, 0x96, 0x77, 0x96,
    0x82, 0x96, 0x90, 0x96, 0x9B, 0x96, 0xCA, 0x96, 0xD8, 0x97, 0xE4, 0x98, 0x0B, 0x98, 0x65, 0x61,
    0x02, 0x96, 0x15, 0x96, 0x21, 0xED, 0xF0, 0xF3, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33,
    0x80, 0xF3, 0xE5, 0xEE, 0xF4, 0xEF, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0x2B, 0xE2,
    0xE5, 0xEE, 0xE7, 0xE1, 0xEC, 0x69, 0x80, 0x09, 0xAA, 0xE3, 0xF5, 0xF4, 0x65, 0x80, 0x1E, 0x55,
    0xE4, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x2A, 0x67, 0x02, 0x96, 0x4D, 0x96, 0x5F, 0x65, 0x02, 0x96,
    0x53, 0x96, 0x5A, 0xE4, 0xEF, 0xF7, 0x6E, 0x80, 0x21, 0xDF, 0xF5, 0x70, 0x80, 0x21, 0xDE, 0x75,
    0x02, 0x96, 0x65, 0x96, 0x6E, 0xEA, 0xE1, 0xF2, 0xE1, 0xF4, 0x69, 0x80, 0x0A, 0xAA, 0xF2, 0xED,
    0xF5, 0xEB, 0xE8, 0x69, 0x80, 0x0A, 0x2A, 0xE8, 0xE9, 0xF2, 0xE1, 0xE7, 0xE1, 0xEE, 0x61, 0x80,
    0x30, 0x71, 0xE9, 0xF9, 0xE1, 0xEE, 0xEE, 0xEF, 0xE9, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x2F,
    0xEB, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0xD1, 0x6C, 0x02, 0x96, 0xA1, 0x96,
    0xBA, 0xE1, 0xF4, 0xE1, 0xEC, 0xE9, 0xFA, 0xE1, 0xF4, 0xE9, 0xEF, 0xEE, 0xE3, 0xF9, 0xF2, 0xE9,
    0xEC, 0xEC, 0xE9, 0xE3, 0xE3, 0xED, 0x62, 0x80, 0x04, 0x84, 0xEF, 0xE3, 0xE8, 0xEB, 0xE1, 0xE3,
    0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0xC0, 0xEE, 0xF3, 0xE9, 0xEF, 0xF3, 0xEB,
    0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31, 0x7F, 0x72, 0x03, 0x96, 0xE0, 0x96, 0xF5, 0x97, 0xD9,
    0x61, 0x02, 0x96, 0xE6, 0x96, 0xEE, 0xE7, 0xF2, 0xE1, 0xF0, 0x68, 0x80, 0x00, 0xB6, 0xEC, 0xEC,
    0xE5, 0x6C, 0x80, 0x22, 0x25, 0xE5, 0x6E, 0x02, 0x96, 0xFC, 0x97, 0x6A, 0xEC, 0xE5, 0xE6, 0x74,
    0x88, 0x00, 0x28, 0x97, 0x13, 0x97, 0x22, 0x97, 0x27, 0x97, 0x2C, 0x97, 0x37, 0x97, 0x43, 0x97,
    0x5A, 0x97, 0x5F, 0xE1, 0xEC, 0xF4, 0xEF, 0xEE, 0xE5, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80,
    0xFD, 0x3E, 0xE2, 0x74, 0x80, 0xF8, 0xED, 0xE5, 0x78, 0x80, 0xF8, 0xEC, 0xE9, 0xEE, 0xE6, 0xE5,
    0xF2, 0xE9, 0xEF, 0x72, 0x80, 0x20, 0x8D, 0xED, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65,
    0x80, 0xFF, 0x08, 0x73, 0x02, 0x97, 0x49, 0x97, 0x50, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xFE, 0x59,
    0xF5, 0xF0, 0xE5, 0xF2, 0xE9, 0xEF, 0x72, 0x80, 0x20, 0x7D, 0xF4, 0x70, 0x80, 0xF8, 0xEB, 0xF6,
    0xE5, 0xF2, 0xF4, 0xE9, 0xE3, 0xE1, 0x6C, 0x80, 0xFE, 0x35, 0xF2, 0xE9, 0xE7, 0xE8, 0x74, 0x88,
    0x00, 0x29, 0x97, 0x82, 0x97, 0x91, 0x97, 0x96, 0x97, 0x9B, 0x97, 0xA6, 0x97, 0xB2, 0x97, 0xC9,
    0x97, 0xCE, 0xE1, 0xEC, 0xF4, 0xEF, 0xEE, 0xE5, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFD,
    0x3F, 0xE2, 0x74, 0x80, 0xF8, 0xF8, 0xE5, 0x78, 0x80, 0xF8, 0xF7, 0xE9, 0xEE, 0xE6, 0xE5, 0xF2,
    0xE9, 0xEF, 0x72, 0x80, 0x20, 0x8E, 0xED, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80,
    0xFF, 0x09, 0x73, 0x02, 0x97, 0xB8, 0x97, 0xBF, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xFE, 0x5A, 0xF5,
    0xF0, 0xE5, 0xF2, 0xE9, 0xEF, 0x72, 0x80, 0x20, 0x7E, 0xF4, 0x70, 0x80, 0xF8, 0xF6, 0xF6, 0xE5,
    0xF2, 0xF4, 0xE9, 0xE3, 0xE1, 0x6C, 0x80, 0xFE, 0x36, 0xF4, 0xE9, 0xE1, 0xEC, 0xE4, 0xE9, 0xE6,
    0x66, 0x80, 0x22, 0x02, 0x73, 0x03, 0x97, 0xEC, 0x97, 0xF7, 0x98, 0x03, 0xE5, 0xF1, 0xE8, 0xE5,
    0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xC0, 0xE8, 0xF4, 0xE1, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77,
    0x80, 0x05, 0x99, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0xA9, 0xF4, 0xE1, 0x68, 0x86, 0x05,
    0xB7, 0x98, 0x1D, 0x98, 0x2B, 0x98, 0x30, 0x98, 0x39, 0x98, 0x48, 0x98, 0x58, 0x31, 0x02, 0x98,
    0x23, 0x98, 0x27, 0x31, 0x80, 0x05, 0xB7, 0x64, 0x80, 0x05, 0xB7, 0xB2, 0x61, 0x80, 0x05, 0xB7,
    0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xB7, 0xEE, 0xE1, 0xF2, 0xF2, 0xEF, 0xF7, 0xE8,
    0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xB7, 0xF1, 0xF5, 0xE1, 0xF2, 0xF4, 0xE5, 0xF2, 0xE8,
    0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xB7, 0xF7, 0xE9, 0xE4, 0xE5, 0xE8, 0xE5, 0xE2, 0xF2,
    0xE5, 0x77, 0x80, 0x05, 0xB7, 0xFA, 0xE5, 0xF2, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05,
    0xA1, 0xE2, 0xEF, 0xF0, 0xEF, 0xED, 0xEF, 0xE6, 0x6F, 0x80, 0x31, 0x06, 0xE3, 0xE9, 0xF2, 0xE3,
    0xEC, 0x65, 0x80, 0x24, 0xDF, 0xE4, 0xEF, 0xF4, 0xE1, 0xE3, 0xE3, 0xE5, 0xEE, 0x74, 0x80, 0x1E,
    0x57, 0x65, 0x89, 0x05, 0xE4, 0x98, 0xA7, 0x98, 0xB2, 0x98, 0xC6, 0x98, 0xD2, 0x98, 0xE6, 0x99,
    0x4C, 0x99, 0x57, 0x99, 0x6C, 0x9A, 0x3F, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80,
    0x04, 0x3F, 0xE4, 0xE1, 0xE7, 0xE5, 0xF3, 0x68, 0x81, 0xFB, 0x44, 0x98, 0xBD, 0xE8, 0xE5, 0xE2,
    0xF2, 0xE5, 0x77, 0x80, 0xFB, 0x44, 0xE5, 0xFA, 0xE9, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80,
    0x33, 0x3B, 0xE6, 0xE9, 0xEE, 0xE1, 0xEC, 0xE4, 0xE1, 0xE7, 0xE5, 0xF3, 0xE8, 0xE8, 0xE5, 0xE2,
    0xF2, 0xE5, 0x77, 0x80, 0xFB, 0x43, 0x68, 0x05, 0x98, 0xF2, 0x99, 0x09, 0x99, 0x11, 0x99, 0x1F,
    0x99, 0x3D, 0xE1, 0x72, 0x02, 0x98, 0xF9, 0x99, 0x00, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0x06, 0x7E,
    0xED, 0xE5, 0xEE, 0xE9, 0xE1, 0x6E, 0x80, 0x05, 0x7A, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05,
    0xE4, 0xE6, 0xE9, 0xEE, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFB, 0x57, 0x69,
    0x02, 0x99, 0x25, 0x99, 0x34, 0xEE, 0xE9, 0xF4, 0xE9, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9,
    0x63, 0x80, 0xFB, 0x58, 0xF2, 0xE1, 0xE7, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0x7A, 0xED, 0xE5, 0xE4,
    0xE9, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFB, 0x59, 0xEB, 0xE1, 0xF4, 0xE1,
    0xEB, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0xDA, 0xED, 0xE9, 0xE4, 0xE4, 0xEC, 0xE5, 0xE8, 0xEF, 0xEF,
    0xEB, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0xA7, 0x72, 0x05, 0x99, 0x78,
    0x99, 0x84, 0x99, 0xAE, 0x9A, 0x27, 0x9A, 0x34, 0xE1, 0xE6, 0xE5, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5,
    0x77, 0x80, 0xFB, 0x4E, 0xE3, 0xE5, 0xEE, 0x74, 0x83, 0x00, 0x25, 0x99, 0x91, 0x99, 0x9A, 0x99,
    0xA6, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0x06, 0x6A, 0xED, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0,
    0xE1, 0xE3, 0x65, 0x80, 0xFF, 0x05, 0xF3, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xFE, 0x6A, 0x69, 0x02,
    0x99, 0xB4, 0x9A, 0x15, 0xEF, 0x64, 0x86, 0x00, 0x2E, 0x99, 0xC5, 0x99, 0xD0, 0x99, 0xDB, 0x99,
    0xE7, 0x99, 0xF2, 0x99, 0xFE, 0xE1, 0xF2, 0xED, 0xE5, 0xEE, 0xE9, 0xE1, 0x6E, 0x80, 0x05, 0x89,
    0xE3, 0xE5, 0xEE, 0xF4, 0xE5, 0xF2, 0xE5, 0x64, 0x80, 0x00, 0xB7, 0xE8, 0xE1, 0xEC, 0xE6, 0xF7,
    0xE9, 0xE4, 0xF4, 0x68, 0x80, 0xFF, 0x61, 0xE9, 0xEE, 0xE6, 0xE5, 0xF2, 0xE9, 0xEF, 0x72, 0x80,
    0xF6, 0xE7, 0xED, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80, 0xFF, 0x0E, 0x73, 0x02,
    0x9A, 0x04, 0x9A, 0x0B, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xFE, 0x52, 0xF5, 0xF0, 0xE5, 0xF2, 0xE9,
    0xEF, 0x72, 0x80, 0xF6, 0xE8, 0xF3, 0xF0, 0xEF, 0xED, 0xE5, 0xEE, 0xE9, 0xE7, 0xF2, 0xE5, 0xE5,
    0xEB, 0xE3, 0xED, 0x62, 0x80, 0x03, 0x42, 0xF0, 0xE5, 0xEE, 0xE4, 0xE9, 0xE3, 0xF5, 0xEC, 0xE1,
    0x72, 0x80, 0x22, 0xA5, 0xF4, 0xE8, 0xEF, 0xF5, 0xF3, 0xE1, 0xEE, 0x64, 0x80, 0x20, 0x30, 0xF3,
    0xE5, 0xF4, 0x61, 0x80, 0x20, 0xA7, 0xE6, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0x8A,
    0x68, 0x03, 0x9A, 0x58, 0x9A, 0x8A, 0x9B, 0x13, 0x61, 0x03, 0x9A, 0x60, 0x9A, 0x6A, 0x9A, 0x71,
    0xE2, 0xE5, 0xEE, 0xE7, 0xE1, 0xEC, 0x69, 0x80, 0x09, 0xAB, 0xE4, 0xE5, 0xF6, 0x61, 0x80, 0x09,
    0x2B, 0xE7, 0x75, 0x02, 0x9A, 0x78, 0x9A, 0x81, 0xEA, 0xE1, 0xF2, 0xE1, 0xF4, 0x69, 0x80, 0x0A,
    0xAB, 0xF2, 0xED, 0xF5, 0xEB, 0xE8, 0x69, 0x80, 0x0A, 0x2B, 0x69, 0x85, 0x03, 0xC6, 0x9A, 0x98,
    0x9A, 0x9C, 0x9A, 0xF2, 0x9A, 0xFA, 0x9B, 0x05, 0x31, 0x80, 0x03, 0xD5, 0xE5, 0xF5, 0xF0, 0x68,
    0x04, 0x9A, 0xA9, 0x9A, 0xCC, 0x9A, 0xDB, 0x9A, 0xE4, 0x61, 0x02, 0x9A, 0xAF, 0x9A, 0xBE, 0xE3,
    0xE9, 0xF2, 0xE3, 0xEC, 0xE5, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x32, 0x7A, 0xF0, 0xE1,
    0xF2, 0xE5, 0xEE, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x32, 0x1A, 0xE3, 0xE9, 0xF2, 0xE3,
    0xEC, 0xE5, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x32, 0x6C, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1,
    0x6E, 0x80, 0x31, 0x4D, 0xF0, 0xE1, 0xF2, 0xE5, 0xEE, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80,
    0x32, 0x0C, 0xEC, 0xE1, 0xF4, 0xE9, 0x6E, 0x80, 0x02, 0x78, 0xEE, 0xF4, 0xE8, 0xF5, 0xF4, 0xE8,
    0xE1, 0x69, 0x80, 0x0E, 0x3A, 0xF3, 0xF9, 0xED, 0xE2, 0xEF, 0xEC, 0xE7, 0xF2, 0xE5, 0xE5, 0x6B,
    0x80, 0x03, 0xD5, 0x6F, 0x03, 0x9B, 0x1B, 0x9B, 0x20, 0x9B, 0x3A, 0xEF, 0x6B, 0x80, 0x01, 0xA5,
    0xF0, 0x68, 0x02, 0x9B, 0x27, 0x9B, 0x30, 0xE1, 0xEE, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x1E,
    0xF5, 0xEE, 0xE7, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x1C, 0xF3, 0xE1, 0xED, 0xF0, 0xE8, 0xE1,
    0xEF, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x20, 0x69, 0x85, 0x03, 0xC0, 0x9B, 0x56, 0x9C, 0x2A,
    0x9C, 0x35, 0x9C, 0x40, 0x9C, 0x4E, 0xE5, 0xF5, 0x70, 0x06, 0x9B, 0x66, 0x9B, 0x89, 0x9B, 0xA9,
    0x9B, 0xC5, 0x9B, 0xD3, 0x9C, 0x07, 0x61, 0x02, 0x9B, 0x6C, 0x9B, 0x7B, 0xE3, 0xE9, 0xF2, 0xE3,
    0xEC, 0xE5, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x32, 0x73, 0xF0, 0xE1, 0xF2, 0xE5, 0xEE,
    0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x32, 0x13, 0xE3, 0x69, 0x02, 0x9B, 0x90, 0x9B, 0x9C,
    0xE5, 0xF5, 0xE3, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31, 0x76, 0xF2, 0xE3, 0xEC, 0xE5,
    0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x32, 0x65, 0x6B, 0x02, 0x9B, 0xAF, 0x9B, 0xBD, 0xE9,
    0xF9, 0xE5, 0xEF, 0xEB, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31, 0x72, 0xEF, 0xF2, 0xE5,
    0xE1, 0x6E, 0x80, 0x31, 0x42, 0xF0, 0xE1, 0xF2, 0xE5, 0xEE, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E,
    0x80, 0x32, 0x05, 0xF3, 0xE9, 0xEF, 0x73, 0x02, 0x9B, 0xDC, 0x9B, 0xF8, 0x6B, 0x02, 0x9B, 0xE2,
    0x9B, 0xF0, 0xE9, 0xF9, 0xE5, 0xEF, 0xEB, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31, 0x74,
    0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31, 0x44, 0xF4, 0xE9, 0xEB, 0xE5, 0xF5, 0xF4, 0xEB, 0xEF,
    0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31, 0x75, 0x74, 0x02, 0x9C, 0x0D, 0x9C, 0x1C, 0xE8, 0xE9, 0xE5,
    0xF5, 0xF4, 0xE8, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31, 0x77, 0xE9, 0xEB, 0xE5, 0xF5,
    0xF4, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31, 0x73, 0xE8, 0xE9, 0xF2, 0xE1, 0xE7, 0xE1,
    0xEE, 0x61, 0x80, 0x30, 0x74, 0xEB, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0xD4,
    0xF3, 0xF9, 0xED, 0xE2, 0xEF, 0xEC, 0xE7, 0xF2, 0xE5, 0xE5, 0x6B, 0x80, 0x03, 0xD6, 0xF7, 0xF2,
    0xE1, 0xF2, 0xED, 0xE5, 0xEE, 0xE9, 0xE1, 0x6E, 0x80, 0x05, 0x83, 0xEC, 0xF5, 0x73, 0x84, 0x00,
    0x2B, 0x9C, 0x69, 0x9C, 0x74, 0x9C, 0x7D, 0x9C, 0x9E, 0xE2, 0xE5, 0xEC, 0xEF, 0xF7, 0xE3, 0xED,
    0x62, 0x80, 0x03, 0x1F, 0xE3, 0xE9, 0xF2, 0xE3, 0xEC, 0x65, 0x80, 0x22, 0x95, 0x6D, 0x02, 0x9C,
    0x83, 0x9C, 0x8A, 0xE9, 0xEE, 0xF5, 0x73, 0x80, 0x00, 0xB1, 0x6F, 0x02, 0x9C, 0x90, 0x9C, 0x94,
    0x64, 0x80, 0x02, 0xD6, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80, 0xFF, 0x0B, 0x73, 0x02,
    0x9C, 0xA4, 0x9C, 0xAB, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xFE, 0x62, 0xF5, 0xF0, 0xE5, 0xF2, 0xE9,
    0xEF, 0x72, 0x80, 0x20, 0x7A, 0x6D, 0x02, 0x9C, 0xBB, 0x9C, 0xC6, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0,
    0xE1, 0xE3, 0x65, 0x80, 0xFF, 0x50, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0xD8, 0x6F,
    0x05, 0x9C, 0xDB, 0x9C, 0xE6, 0x9D, 0x29, 0x9D, 0x34, 0x9D, 0x3E, 0xE8, 0xE9, 0xF2, 0xE1, 0xE7,
    0xE1, 0xEE, 0x61, 0x80, 0x30, 0x7D, 0xE9, 0xEE, 0xF4, 0xE9, 0xEE, 0xE7, 0xE9, 0xEE, 0xE4, 0xE5,
    0x78, 0x04, 0x9C, 0xFA, 0x9D, 0x06, 0x9D, 0x12, 0x9D, 0x1F, 0xE4, 0xEF, 0xF7, 0xEE, 0xF7, 0xE8,
    0xE9, 0xF4, 0x65, 0x80, 0x26, 0x1F, 0xEC, 0xE5, 0xE6, 0xF4, 0xF7, 0xE8, 0xE9, 0xF4, 0x65, 0x80,
    0x26, 0x1C, 0xF2, 0xE9, 0xE7, 0xE8, 0xF4, 0xF7, 0xE8, 0xE9, 0xF4, 0x65, 0x80, 0x26, 0x1E, 0xF5,
    0xF0, 0xF7, 0xE8, 0xE9, 0xF4, 0x65, 0x80, 0x26, 0x1D, 0xEB, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1, 0xEE,
    0x61, 0x80, 0x30, 0xDD, 0xF0, 0xEC, 0xE1, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x1B, 0xF3, 0xF4,
    0xE1, 0xEC, 0xED, 0xE1, 0xF2, 0x6B, 0x81, 0x30, 0x12, 0x9D, 0x4B, 0xE6, 0xE1, 0xE3, 0x65, 0x80,
    0x30, 0x20, 0xF0, 0xE1, 0xF2, 0xE5, 0x6E, 0x80, 0x24, 0xAB, 0x72, 0x03, 0x9D, 0x62, 0x9D, 0x7C,
    0x9D, 0x95, 0x65, 0x02, 0x9D, 0x68, 0x9D, 0x70, 0xE3, 0xE5, 0xE4, 0xE5, 0x73, 0x80, 0x22, 0x7A,
    0xF3, 0xE3, 0xF2, 0xE9, 0xF0, 0xF4, 0xE9, 0xEF, 0x6E, 0x80, 0x21, 0x1E, 0xE9, 0xED, 0x65, 0x02,
    0x9D, 0x84, 0x9D, 0x8A, 0xED, 0xEF, 0x64, 0x80, 0x02, 0xB9, 0xF2, 0xE5, 0xF6, 0xE5, 0xF2, 0xF3,
    0xE5, 0x64, 0x80, 0x20, 0x35, 0x6F, 0x04, 0x9D, 0x9F, 0x9D, 0xA6, 0x9D, 0xB0, 0x9D, 0xBD, 0xE4,
    0xF5, 0xE3, 0x74, 0x80, 0x22, 0x0F, 0xEA, 0xE5, 0xE3, 0xF4, 0xE9, 0xF6, 0x65, 0x80, 0x23, 0x05,
    0xEC, 0xEF, 0xEE, 0xE7, 0xE5, 0xE4, 0xEB, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0xFC, 0x70, 0x02, 0x9D,
    0xC3, 0x9D, 0xE8, 0x65, 0x02, 0x9D, 0xC9, 0x9D, 0xD0, 0xEC, 0xEC, 0xEF, 0x72, 0x80, 0x23, 0x18,
    0xF2, 0xF3, 0x75, 0x02, 0x9D, 0xD8, 0x9D, 0xDF, 0xE2, 0xF3, 0xE5, 0x74, 0x80, 0x22, 0x82, 0xF0,
    0xE5, 0xF2, 0xF3, 0xE5, 0x74, 0x80, 0x22, 0x83, 0xEF, 0xF2, 0xF4, 0xE9, 0xEF, 0x6E, 0x81, 0x22,
    0x37, 0x9D, 0xF3, 0xE1, 0x6C, 0x80, 0x22, 0x1D, 0x73, 0x02, 0x9D, 0xFE, 0x9E, 0x29, 0x69, 0x82,
    0x03, 0xC8, 0x9E, 0x06, 0x9E, 0x11, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04,
    0x71, 0xEC, 0xE9, 0xF0, 0xEE, 0xE5, 0xF5, 0xED, 0xE1, 0xF4, 0xE1, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC,
    0xEC, 0xE9, 0xE3, 0xE3, 0xED, 0x62, 0x80, 0x04, 0x86, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80,
    0x33, 0xB0, 0x75, 0x02, 0x9E, 0x38, 0x9E, 0x43, 0xE8, 0xE9, 0xF2, 0xE1, 0xE7, 0xE1, 0xEE, 0x61,
    0x80, 0x30, 0x77, 0xEB, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0xD7, 0xF6, 0xF3,
    0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0xB4, 0xF7, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80,
    0x33, 0xBA, 0x71, 0x88, 0x00, 0x71, 0x9E, 0x76, 0x9F, 0xA7, 0x9F, 0xB2, 0x9F, 0xBB, 0x9F, 0xC2,
    0x9F, 0xCE, 0x9F, 0xF4, 0x9F, 0xFC, 0x61, 0x04, 0x9E, 0x80, 0x9E, 0x97, 0x9E, 0xD7, 0x9F, 0x96,
    0x64, 0x02, 0x9E, 0x86, 0x9E, 0x8C, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x58, 0xED, 0xE1, 0xE8, 0xE5,
    0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xA8, 0x66, 0x04, 0x9E, 0xA1, 0x9E, 0xAA, 0x9E, 0xB8, 0x9E,
    0xC8, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0x06, 0x42, 0xE6, 0xE9, 0xEE, 0xE1, 0xEC, 0xE1,
    0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE, 0xD6, 0xE9, 0xEE, 0xE9, 0xF4, 0xE9, 0xE1, 0xEC, 0xE1,
    0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE, 0xD7, 0xED, 0xE5, 0xE4, 0xE9, 0xE1, 0xEC, 0xE1, 0xF2,
    0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE, 0xD8, 0xED, 0xE1, 0xF4, 0x73, 0x88, 0x05, 0xB8, 0x9E, 0xEE,
    0x9F, 0x02, 0x9F, 0x10, 0x9F, 0x15, 0x9F, 0x1A, 0x9F, 0x23, 0x9F, 0x32, 0x9F, 0x89, 0x31, 0x03,
    0x9E, 0xF6, 0x9E, 0xFA, 0x9E, 0xFE, 0x30, 0x80, 0x05, 0xB8, 0x61, 0x80, 0x05, 0xB8, 0x63, 0x80,
    0x05, 0xB8, 0x32, 0x02, 0x9F, 0x08, 0x9F, 0x0C, 0x37, 0x80, 0x05, 0xB8, 0x39, 0x80, 0x05, 0xB8,
    0xB3, 0x33, 0x80, 0x05, 0xB8, 0xE4, 0x65, 0x80, 0x05, 0xB8, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77,
    0x80, 0x05, 0xB8, 0xEE, 0xE1, 0xF2, 0xF2, 0xEF, 0xF7, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80,
    0x05, 0xB8, 0x71, 0x02, 0x9F, 0x38, 0x9F, 0x7A, 0xE1, 0xF4, 0xE1, 0x6E, 0x04, 0x9F, 0x45, 0x9F,
    0x4E, 0x9F, 0x5D, 0x9F, 0x6D, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xB8, 0xEE, 0xE1,
    0xF2, 0xF2, 0xEF, 0xF7, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xB8, 0xF1, 0xF5, 0xE1,
    0xF2, 0xF4, 0xE5, 0xF2, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xB8, 0xF7, 0xE9, 0xE4,
    0xE5, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xB8, 0xF5, 0xE1, 0xF2, 0xF4, 0xE5, 0xF2,
    0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xB8, 0xF7, 0xE9, 0xE4, 0xE5, 0xE8, 0xE5, 0xE2,
    0xF2, 0xE5, 0x77, 0x80, 0x05, 0xB8, 0xF2, 0xEE, 0xE5, 0xF9, 0xF0, 0xE1, 0xF2, 0xE1, 0xE8, 0xE5,
    0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0x9F, 0xE2, 0xEF, 0xF0, 0xEF, 0xED, 0xEF, 0xE6, 0x6F, 0x80,
    0x31, 0x11, 0xE3, 0xE9, 0xF2, 0xE3, 0xEC, 0x65, 0x80, 0x24, 0xE0, 0xE8, 0xEF, 0xEF, 0x6B, 0x80,
    0x02, 0xA0, 0xED, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80, 0xFF, 0x51, 0xEF, 0x66,
    0x82, 0x05, 0xE7, 0x9F, 0xD7, 0x9F, 0xEB, 0xE4, 0xE1, 0xE7, 0xE5, 0xF3, 0x68, 0x81, 0xFB, 0x47,
    0x9F, 0xE2, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0xFB, 0x47, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5,
    0x77, 0x80, 0x05, 0xE7, 0xF0, 0xE1, 0xF2, 0xE5, 0x6E, 0x80, 0x24, 0xAC, 0x75, 0x04, 0xA0, 0x06,
    0xA0, 0x12, 0xA0, 0x6B, 0xA0, 0xC2, 0xE1, 0xF2, 0xF4, 0xE5, 0xF2, 0xEE, 0xEF, 0xF4, 0x65, 0x80,
    0x26, 0x69, 0xE2, 0xF5, 0xF4, 0x73, 0x87, 0x05, 0xBB, 0xA0, 0x27, 0xA0, 0x2C, 0xA0, 0x31, 0xA0,
    0x36, 0xA0, 0x3F, 0xA0, 0x4E, 0xA0, 0x5E, 0xB1, 0x38, 0x80, 0x05, 0xBB, 0xB2, 0x35, 0x80, 0x05,
    0xBB, 0xB3, 0x31, 0x80, 0x05, 0xBB, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xBB, 0xEE,
    0xE1, 0xF2, 0xF2, 0xEF, 0xF7, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xBB, 0xF1, 0xF5,
    0xE1, 0xF2, 0xF4, 0xE5, 0xF2, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xBB, 0xF7, 0xE9,
    0xE4, 0xE5, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xBB, 0xE5, 0xF3, 0xF4, 0xE9, 0xEF,
    0x6E, 0x85, 0x00, 0x3F, 0xA0, 0x7E, 0xA0, 0x95, 0xA0, 0xA6, 0xA0, 0xAE, 0xA0, 0xBA, 0xE1, 0x72,
    0x02, 0xA0, 0x85, 0xA0, 0x8C, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0x06, 0x1F, 0xED, 0xE5, 0xEE, 0xE9,
    0xE1, 0x6E, 0x80, 0x05, 0x5E, 0xE4, 0xEF, 0xF7, 0x6E, 0x81, 0x00, 0xBF, 0xA0, 0x9E, 0xF3, 0xED,
    0xE1, 0xEC, 0x6C, 0x80, 0xF7, 0xBF, 0xE7, 0xF2, 0xE5, 0xE5, 0x6B, 0x80, 0x03, 0x7E, 0xED, 0xEF,
    0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80, 0xFF, 0x1F, 0xF3, 0xED, 0xE1, 0xEC, 0x6C, 0x80,
    0xF7, 0x3F, 0xEF, 0xF4, 0x65, 0x04, 0xA0, 0xCE, 0xA1, 0x15, 0xA1, 0x29, 0xA1, 0x46, 0xE4, 0xE2,
    0x6C, 0x85, 0x00, 0x22, 0xA0, 0xDE, 0xA0, 0xE5, 0xA0, 0xEC, 0xA0, 0xF8, 0xA1, 0x0D, 0xE2, 0xE1,
    0xF3, 0x65, 0x80, 0x20, 0x1E, 0xEC, 0xE5, 0xE6, 0x74, 0x80, 0x20, 0x1C, 0xED, 0xEF, 0xEE, 0xEF,
    0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80, 0xFF, 0x02, 0xF0, 0xF2, 0xE9, 0xED, 0x65, 0x81, 0x30, 0x1E,
    0xA1, 0x02, 0xF2, 0xE5, 0xF6, 0xE5, 0xF2, 0xF3, 0xE5, 0x64, 0x80, 0x30, 0x1D, 0xF2, 0xE9, 0xE7,
    0xE8, 0x74, 0x80, 0x20, 0x1D, 0xEC, 0xE5, 0xE6, 0x74, 0x81, 0x20, 0x18, 0xA1, 0x1E, 0xF2, 0xE5,
    0xF6, 0xE5, 0xF2, 0xF3, 0xE5, 0x64, 0x80, 0x20, 0x1B, 0x72, 0x02, 0xA1, 0x2F, 0xA1, 0x39, 0xE5,
    0xF6, 0xE5, 0xF2, 0xF3, 0xE5, 0x64, 0x80, 0x20, 0x1B, 0xE9, 0xE7, 0xE8, 0x74, 0x81, 0x20, 0x19,
    0xA1, 0x42, 0x6E, 0x80, 0x01, 0x49, 0xF3, 0xE9, 0xEE, 0xE7, 0x6C, 0x02, 0xA1, 0x50, 0xA1, 0x57,
    0xE2, 0xE1, 0xF3, 0x65, 0x80, 0x20, 0x1A, 0x65, 0x81, 0x00, 0x27, 0xA1, 0x5D, 0xED, 0xEF, 0xEE,
    0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80, 0xFF, 0x07, 0x72, 0x91, 0x00, 0x72, 0xA1, 0x8F, 0xA2,
    0x93, 0xA2, 0x9E, 0xA2, 0xCD, 0xA3, 0x00, 0xA4, 0x11, 0xA4, 0x29, 0xA4, 0x88, 0xA6, 0xAA, 0xA6,
    0xCF, 0xA6, 0xDB, 0xA7, 0x11, 0xA7, 0x19, 0xA7, 0xBB, 0xA7, 0xC6, 0xA7, 0xE9, 0xA8, 0x4D, 0x61,
    0x0B, 0xA1, 0xA7, 0xA1, 0xB2, 0xA1, 0xBC, 0xA1, 0xC3, 0xA2, 0x04, 0xA2, 0x14, 0xA2, 0x2D, 0xA2,
    0x38, 0xA2, 0x51, 0xA2, 0x68, 0xA2, 0x8D, 0xE1, 0xF2, 0xED, 0xE5, 0xEE, 0xE9, 0xE1, 0x6E, 0x80,
    0x05, 0x7C, 0xE2, 0xE5, 0xEE, 0xE7, 0xE1, 0xEC, 0x69, 0x80, 0x09, 0xB0, 0xE3, 0xF5, 0xF4, 0x65,
    0x80, 0x01, 0x55, 0x64, 0x04, 0xA1, 0xCD, 0xA1, 0xD3, 0xA1, 0xE1, 0xA1, 0xFB, 0xE5, 0xF6, 0x61,
    0x80, 0x09, 0x30, 0xE9, 0xE3, 0xE1, 0x6C, 0x81, 0x22, 0x1A, 0xA1, 0xDC, 0xE5, 0x78, 0x80, 0xF8,
    0xE5, 0xEF, 0xF6, 0xE5, 0xF2, 0xF3, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x81, 0x33, 0xAE, 0xA1,
    0xF1, 0xE4, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0xAF, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2,
    0x65, 0x80, 0x33, 0xAD, 0xE6, 0x65, 0x81, 0x05, 0xBF, 0xA2, 0x0B, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5,
    0x77, 0x80, 0x05, 0xBF, 0xE7, 0x75, 0x02, 0xA2, 0x1B, 0xA2, 0x24, 0xEA, 0xE1, 0xF2, 0xE1, 0xF4,
    0x69, 0x80, 0x0A, 0xB0, 0xF2, 0xED, 0xF5, 0xEB, 0xE8, 0x69, 0x80, 0x0A, 0x30, 0xE8, 0xE9, 0xF2,
    0xE1, 0xE7, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0x89, 0xEB, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1, 0xEE, 0x61,
    0x81, 0x30, 0xE9, 0xA2, 0x45, 0xE8, 0xE1, 0xEC, 0xE6, 0xF7, 0xE9, 0xE4, 0xF4, 0x68, 0x80, 0xFF,
    0x97, 0xEC, 0xEF, 0xF7, 0xE5, 0xF2, 0xE4, 0xE9, 0xE1, 0xE7, 0xEF, 0xEE, 0xE1, 0xEC, 0xE2, 0xE5,
    0xEE, 0xE7, 0xE1, 0xEC, 0x69, 0x80, 0x09, 0xF1, 0x6D, 0x02, 0xA2, 0x6E, 0xA2, 0x85, 0xE9, 0xE4,
    0xE4, 0xEC, 0xE5, 0xE4, 0xE9, 0xE1, 0xE7, 0xEF, 0xEE, 0xE1, 0xEC, 0xE2, 0xE5, 0xEE, 0xE7, 0xE1,
    0xEC, 0x69, 0x80, 0x09, 0xF0, 0xF3, 0xE8, 0xEF, 0xF2, 0x6E, 0x80, 0x02, 0x64, 0xF4, 0xE9, 0x6F,
    0x80, 0x22, 0x36, 0xE2, 0xEF, 0xF0, 0xEF, 0xED, 0xEF, 0xE6, 0x6F, 0x80, 0x31, 0x16, 0x63, 0x04,
    0xA2, 0xA8, 0xA2, 0xAF, 0xA2, 0xB8, 0xA2, 0xC0, 0xE1, 0xF2, 0xEF, 0x6E, 0x80, 0x01, 0x59, 0xE5,
    0xE4, 0xE9, 0xEC, 0xEC, 0x61, 0x80, 0x01, 0x57, 0xE9, 0xF2, 0xE3, 0xEC, 0x65, 0x80, 0x24, 0xE1,
    0xEF, 0xED, 0xED, 0xE1, 0xE1, 0xE3, 0xE3, 0xE5, 0xEE, 0x74, 0x80, 0x01, 0x57, 0x64, 0x02, 0xA2,
    0xD3, 0xA2, 0xDD, 0xE2, 0xEC, 0xE7, 0xF2, 0xE1, 0xF6, 0x65, 0x80, 0x02, 0x11, 0xEF, 0x74, 0x02,
    0xA2, 0xE4, 0xA2, 0xED, 0xE1, 0xE3, 0xE3, 0xE5, 0xEE, 0x74, 0x80, 0x1E, 0x59, 0xE2, 0xE5, 0xEC,
    0xEF, 0x77, 0x81, 0x1E, 0x5B, 0xA2, 0xF7, 0xED, 0xE1, 0xE3, 0xF2, 0xEF, 0x6E, 0x80, 0x1E, 0x5D,
    0x65, 0x06, 0xA3, 0x0E, 0xA3, 0x3B, 0xA3, 0x5E, 0xA3, 0x95, 0xA3, 0xAE, 0xA3, 0xCF, 0x66, 0x02,
    0xA3, 0x14, 0xA3, 0x21, 0xE5, 0xF2, 0xE5, 0xEE, 0xE3, 0xE5, 0xED, 0xE1, 0xF2, 0x6B, 0x80, 0x20,
    0x3B, 0xEC, 0xE5, 0xF8, 0xF3, 0x75, 0x02, 0xA3, 0x2B, 0xA3, 0x32, 0xE2, 0xF3, 0xE5, 0x74, 0x80,
    0x22, 0x86, 0xF0, 0xE5, 0xF2, 0xF3, 0xE5, 0x74, 0x80, 0x22, 0x87, 0xE7, 0xE9, 0xF3, 0xF4, 0xE5,
    0x72, 0x02, 0xA3, 0x46, 0xA3, 0x4B, 0xE5, 0x64, 0x80, 0x00, 0xAE, 0x73, 0x02, 0xA3, 0x51, 0xA3,
    0x57, 0xE1, 0xEE, 0x73, 0x80, 0xF8, 0xE8, 0xE5, 0xF2, 0xE9, 0x66, 0x80, 0xF6, 0xDA, 0x68, 0x03,
    0xA3, 0x66, 0xA3, 0x7D, 0xA3, 0x8B, 0xE1, 0x72, 0x02, 0xA3, 0x6D, 0xA3, 0x74, 0xE1, 0xE2, 0xE9,
    0x63, 0x80, 0x06, 0x31, 0xED, 0xE5, 0xEE, 0xE9, 0xE1, 0x6E, 0x80, 0x05, 0x80, 0xE6, 0xE9, 0xEE,
    0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE, 0xAE, 0xE9, 0xF2, 0xE1, 0xE7, 0xE1,
    0xEE, 0x61, 0x80, 0x30, 0x8C, 0xEB, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1, 0xEE, 0x61, 0x81, 0x30, 0xEC,
    0xA3, 0xA2, 0xE8, 0xE1, 0xEC, 0xE6, 0xF7, 0xE9, 0xE4, 0xF4, 0x68, 0x80, 0xFF, 0x9A, 0xF3, 0x68,
    0x82, 0x05, 0xE8, 0xA3, 0xB7, 0xA3, 0xC6, 0xE4, 0xE1, 0xE7, 0xE5, 0xF3, 0xE8, 0xE8, 0xE5, 0xE2,
    0xF2, 0xE5, 0x77, 0x80, 0xFB, 0x48, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xE8, 0x76,
    0x03, 0xA3, 0xD7, 0xA3, 0xE4, 0xA4, 0x04, 0xE5, 0xF2, 0xF3, 0xE5, 0xE4, 0xF4, 0xE9, 0xEC, 0xE4,
    0x65, 0x80, 0x22, 0x3D, 0xE9, 0x61, 0x02, 0xA3, 0xEB, 0xA3, 0xF4, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5,
    0x77, 0x80, 0x05, 0x97, 0xED, 0xF5, 0xE7, 0xF2, 0xE1, 0xF3, 0xE8, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5,
    0x77, 0x80, 0x05, 0x97, 0xEC, 0xEF, 0xE7, 0xE9, 0xE3, 0xE1, 0xEC, 0xEE, 0xEF, 0x74, 0x80, 0x23,
    0x10, 0xE6, 0xE9, 0xF3, 0xE8, 0xE8, 0xEF, 0xEF, 0x6B, 0x81, 0x02, 0x7E, 0xA4, 0x1E, 0xF2, 0xE5,
    0xF6, 0xE5, 0xF2, 0xF3, 0xE5, 0x64, 0x80, 0x02, 0x7F, 0x68, 0x02, 0xA4, 0x2F, 0xA4, 0x46, 0x61,
    0x02, 0xA4, 0x35, 0xA4, 0x3F, 0xE2, 0xE5, 0xEE, 0xE7, 0xE1, 0xEC, 0x69, 0x80, 0x09, 0xDD, 0xE4,
    0xE5, 0xF6, 0x61, 0x80, 0x09, 0x5D, 0x6F, 0x83, 0x03, 0xC1, 0xA4, 0x50, 0xA4, 0x6D, 0xA4, 0x7B,
    0xEF, 0x6B, 0x81, 0x02, 0x7D, 0xA4, 0x57, 0xF4, 0xF5, 0xF2, 0xEE, 0xE5, 0x64, 0x81, 0x02, 0x7B,
    0xA4, 0x62, 0xF3, 0xF5, 0xF0, 0xE5, 0xF2, 0xE9, 0xEF, 0x72, 0x80, 0x02, 0xB5, 0xF3, 0xF9, 0xED,
    0xE2, 0xEF, 0xEC, 0xE7, 0xF2, 0xE5, 0xE5, 0x6B, 0x80, 0x03, 0xF1, 0xF4, 0xE9, 0xE3, 0xE8, 0xEF,
    0xEF, 0xEB, 0xED, 0xEF, 0x64, 0x80, 0x02, 0xDE, 0x69, 0x06, 0xA4, 0x96, 0xA5, 0xC2, 0xA5, 0xF0,
    0xA5, 0xFB, 0xA6, 0x14, 0xA6, 0x9C, 0xE5, 0xF5, 0x6C, 0x09, 0xA4, 0xAC, 0xA4, 0xCF, 0xA4, 0xDE,
    0xA4, 0xEC, 0xA5, 0x1A, 0xA5, 0x28, 0xA5, 0x7E, 0xA5, 0x8B, 0xA5, 0xAE, 0x61, 0x02, 0xA4, 0xB2,
    0xA4, 0xC1, 0xE3, 0xE9, 0xF2, 0xE3, 0xEC, 0xE5, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x32,
    0x71, 0xF0, 0xE1, 0xF2, 0xE5, 0xEE, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x32, 0x11, 0xE3,
    0xE9, 0xF2, 0xE3, 0xEC, 0xE5, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x32, 0x63, 0xE8, 0xE9,
    0xE5, 0xF5, 0xE8, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31, 0x40, 0x6B, 0x02, 0xA4, 0xF2,
    0xA5, 0x12, 0xE9, 0xF9, 0xE5, 0xEF, 0x6B, 0x02, 0xA4, 0xFC, 0xA5, 0x05, 0xEB, 0xEF, 0xF2, 0xE5,
    0xE1, 0x6E, 0x80, 0x31, 0x3A, 0xF3, 0xE9, 0xEF, 0xF3, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80,
    0x31, 0x69, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31, 0x39, 0xED, 0xE9, 0xE5, 0xF5, 0xED, 0xEB,
    0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31, 0x3B, 0x70, 0x03, 0xA5, 0x30, 0xA5, 0x50, 0xA5, 0x5F,
    0x61, 0x02, 0xA5, 0x36, 0xA5, 0x44, 0xEE, 0xF3, 0xE9, 0xEF, 0xF3, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1,
    0x6E, 0x80, 0x31, 0x6C, 0xF2, 0xE5, 0xEE, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x32, 0x03,
    0xE8, 0xE9, 0xE5, 0xF5, 0xF0, 0xE8, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31, 0x3F, 0xE9,
    0xE5, 0xF5, 0x70, 0x02, 0xA5, 0x68, 0xA5, 0x71, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31,
    0x3C, 0xF3, 0xE9, 0xEF, 0xF3, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31, 0x6B, 0xF3, 0xE9,
    0xEF, 0xF3, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31, 0x3D, 0x74, 0x02, 0xA5, 0x91, 0xA5,
    0xA0, 0xE8, 0xE9, 0xE5, 0xF5, 0xF4, 0xE8, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31, 0x3E,
    0xE9, 0xEB, 0xE5, 0xF5, 0xF4, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31, 0x6A, 0xF9, 0xE5,
    0xEF, 0xF2, 0xE9, 0xEE, 0xE8, 0xE9, 0xE5, 0xF5, 0xE8, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80,
    0x31, 0x6D, 0xE7, 0xE8, 0x74, 0x02, 0xA5, 0xCA, 0xA5, 0xD2, 0xE1, 0xEE, 0xE7, 0xEC, 0x65, 0x80,
    0x22, 0x1F, 0x74, 0x02, 0xA5, 0xD8, 0xA5, 0xE6, 0xE1, 0xE3, 0xEB, 0xE2, 0xE5, 0xEC, 0xEF, 0xF7,
    0xE3, 0xED, 0x62, 0x80, 0x03, 0x19, 0xF2, 0xE9, 0xE1, 0xEE, 0xE7, 0xEC, 0x65, 0x80, 0x22, 0xBF,
    0xE8, 0xE9, 0xF2, 0xE1, 0xE7, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0x8A, 0xEB, 0xE1, 0xF4, 0xE1, 0xEB,
    0xE1, 0xEE, 0x61, 0x81, 0x30, 0xEA, 0xA6, 0x08, 0xE8, 0xE1, 0xEC, 0xE6, 0xF7, 0xE9, 0xE4, 0xF4,
    0x68, 0x80, 0xFF, 0x98, 0x6E, 0x02, 0xA6, 0x1A, 0xA6, 0x8E, 0x67, 0x83, 0x02, 0xDA, 0xA6, 0x24,
    0xA6, 0x2F, 0xA6, 0x35, 0xE2, 0xE5, 0xEC, 0xEF, 0xF7, 0xE3, 0xED, 0x62, 0x80, 0x03, 0x25, 0xE3,
    0xED, 0x62, 0x80, 0x03, 0x0A, 0xE8, 0xE1, 0xEC, 0x66, 0x02, 0xA6, 0x3E, 0xA6, 0x6C, 0xEC, 0xE5,
    0xE6, 0x74, 0x83, 0x02, 0xBF, 0xA6, 0x4B, 0xA6, 0x56, 0xA6, 0x61, 0xE1, 0xF2, 0xED, 0xE5, 0xEE,
    0xE9, 0xE1, 0x6E, 0x80, 0x05, 0x59, 0xE2, 0xE5, 0xEC, 0xEF, 0xF7, 0xE3, 0xED, 0x62, 0x80, 0x03,
    0x1C, 0xE3, 0xE5, 0xEE, 0xF4, 0xE5, 0xF2, 0xE5, 0x64, 0x80, 0x02, 0xD3, 0xF2, 0xE9, 0xE7, 0xE8,
    0x74, 0x82, 0x02, 0xBE, 0xA6, 0x78, 0xA6, 0x83, 0xE2, 0xE5, 0xEC, 0xEF, 0xF7, 0xE3, 0xED, 0x62,
    0x80, 0x03, 0x39, 0xE3, 0xE5, 0xEE, 0xF4, 0xE5, 0xF2, 0xE5, 0x64, 0x80, 0x02, 0xD2, 0xF6, 0xE5,
    0xF2, 0xF4, 0xE5, 0xE4, 0xE2, 0xF2, 0xE5, 0xF6, 0x65, 0x80, 0x02, 0x13, 0xF4, 0xF4, 0xEF, 0xF2,
    0xF5, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0x51, 0x6C, 0x02, 0xA6, 0xB0, 0xA6, 0xBB,
    0xE9, 0xEE, 0xE5, 0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E, 0x5F, 0xEF, 0xEE, 0xE7, 0xEC, 0xE5,
    0x67, 0x81, 0x02, 0x7C, 0xA6, 0xC6, 0xF4, 0xF5, 0xF2, 0xEE, 0xE5, 0x64, 0x80, 0x02, 0x7A, 0xED,
    0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80, 0xFF, 0x52, 0x6F, 0x03, 0xA6, 0xE3, 0xA6,
    0xEE, 0xA7, 0x07, 0xE8, 0xE9, 0xF2, 0xE1, 0xE7, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0x8D, 0xEB, 0xE1,
    0xF4, 0xE1, 0xEB, 0xE1, 0xEE, 0x61, 0x81, 0x30, 0xED, 0xA6, 0xFB, 0xE8, 0xE1, 0xEC, 0xE6, 0xF7,
    0xE9, 0xE4, 0xF4, 0x68, 0x80, 0xFF, 0x9B, 0xF2, 0xF5, 0xE1, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0x0E,
    0x23, 0xF0, 0xE1, 0xF2, 0xE5, 0x6E, 0x80, 0x24, 0xAD, 0x72, 0x03, 0xA7, 0x21, 0xA7, 0x45, 0xA7,
    0x63, 0x61, 0x03, 0xA7, 0x29, 0xA7, 0x33, 0xA7, 0x3A, 0xE2, 0xE5, 0xEE, 0xE7, 0xE1, 0xEC, 0x69,
    0x80, 0x09, 0xDC, 0xE4, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x31, 0xE7, 0xF5, 0xF2, 0xED, 0xF5, 0xEB,
    0xE8, 0x69, 0x80, 0x0A, 0x5C, 0xE5, 0x68, 0x02, 0xA7, 0x4C, 0xA7, 0x55, 0xE1, 0xF2, 0xE1, 0xE2,
    0xE9, 0x63, 0x80, 0x06, 0x91, 0xE6, 0xE9, 0xEE, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63,
    0x80, 0xFB, 0x8D, 0xF6, 0xEF, 0xE3, 0xE1, 0xEC, 0xE9, 0x63, 0x04, 0xA7, 0x73, 0xA7, 0x7D, 0xA7,
    0x84, 0xA7, 0x8F, 0xE2, 0xE5, 0xEE, 0xE7, 0xE1, 0xEC, 0x69, 0x80, 0x09, 0xE0, 0xE4, 0xE5, 0xF6,
    0x61, 0x80, 0x09, 0x60, 0xE7, 0xF5, 0xEA, 0xE1, 0xF2, 0xE1, 0xF4, 0x69, 0x80, 0x0A, 0xE0, 0xF6,
    0xEF, 0xF7, 0xE5, 0xEC, 0xF3, 0xE9, 0xE7, 0x6E, 0x03, 0xA7, 0x9F, 0xA7, 0xA9, 0xA7, 0xB0, 0xE2,
    0xE5, 0xEE, 0xE7, 0xE1, 0xEC, 0x69, 0x80, 0x09, 0xC4, 0xE4, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x44,
    0xE7, 0xF5, 0xEA, 0xE1, 0xF2, 0xE1, 0xF4, 0x69, 0x80, 0x0A, 0xC4, 0xF3, 0xF5, 0xF0, 0xE5, 0xF2,
    0xE9, 0xEF, 0x72, 0x80, 0xF6, 0xF1, 0x74, 0x02, 0xA7, 0xCC, 0xA7, 0xD4, 0xE2, 0xEC, 0xEF, 0xE3,
    0x6B, 0x80, 0x25, 0x90, 0xF5, 0xF2, 0xEE, 0xE5, 0x64, 0x81, 0x02, 0x79, 0xA7, 0xDE, 0xF3, 0xF5,
    0xF0, 0xE5, 0xF2, 0xE9, 0xEF, 0x72, 0x80, 0x02, 0xB4, 0x75, 0x04, 0xA7, 0xF3, 0xA7, 0xFE, 0xA8,
    0x17, 0xA8, 0x46, 0xE8, 0xE9, 0xF2, 0xE1, 0xE7, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0x8B, 0xEB, 0xE1,
    0xF4, 0xE1, 0xEB, 0xE1, 0xEE, 0x61, 0x81, 0x30, 0xEB, 0xA8, 0x0B, 0xE8, 0xE1, 0xEC, 0xE6, 0xF7,
    0xE9, 0xE4, 0xF4, 0x68, 0x80, 0xFF, 0x99, 0x70, 0x02, 0xA8, 0x1D, 0xA8, 0x40, 0xE5, 0x65, 0x02,
    0xA8, 0x24, 0xA8, 0x32, 0xED, 0xE1, 0xF2, 0xEB, 0xE2, 0xE5, 0xEE, 0xE7, 0xE1, 0xEC, 0x69, 0x80,
    0x09, 0xF2, 0xF3, 0xE9, 0xE7, 0xEE, 0xE2, 0xE5, 0xEE, 0xE7, 0xE1, 0xEC, 0x69, 0x80, 0x09, 0xF3,
    0xE9, 0xE1, 0x68, 0x80, 0xF6, 0xDD, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x24, 0xF6, 0xEF, 0xE3,
    0xE1, 0xEC, 0xE9, 0x63, 0x04, 0xA8, 0x5D, 0xA8, 0x67, 0xA8, 0x6E, 0xA8, 0x79, 0xE2, 0xE5, 0xEE,
    0xE7, 0xE1, 0xEC, 0x69, 0x80, 0x09, 0x8B, 0xE4, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x0B, 0xE7, 0xF5,
    0xEA, 0xE1, 0xF2, 0xE1, 0xF4, 0x69, 0x80, 0x0A, 0x8B, 0xF6, 0xEF, 0xF7, 0xE5, 0xEC, 0xF3, 0xE9,
    0xE7, 0x6E, 0x03, 0xA8, 0x89, 0xA8, 0x93, 0xA8, 0x9A, 0xE2, 0xE5, 0xEE, 0xE7, 0xE1, 0xEC, 0x69,
    0x80, 0x09, 0xC3, 0xE4, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x43, 0xE7, 0xF5, 0xEA, 0xE1, 0xF2, 0xE1,
    0xF4, 0x69, 0x80, 0x0A, 0xC3, 0x73, 0x93, 0x00, 0x73, 0xA8, 0xCF, 0xAA, 0xB1, 0xAA, 0xBC, 0xAB,
    0x3A, 0xAB, 0x61, 0xAE, 0x27, 0xAE, 0x32, 0xB0, 0xC1, 0xB3, 0x4B, 0xB3, 0x79, 0xB3, 0x94, 0xB4,
    0x53, 0xB4, 0x96, 0xB5, 0xB7, 0xB5, 0xC1, 0xB6, 0x7B, 0xB6, 0xC4, 0xB7, 0x6E, 0xB7, 0x78, 0x61,
    0x09, 0xA8, 0xE3, 0xA8, 0xED, 0xA9, 0x02, 0xA9, 0x4A, 0xA9, 0x63, 0xA9, 0x6E, 0xA9, 0x87, 0xA9,
    0xA7, 0xA9, 0xCF, 0xE2, 0xE5, 0xEE, 0xE7, 0xE1, 0xEC, 0x69, 0x80, 0x09, 0xB8, 0xE3, 0xF5, 0xF4,
    0x65, 0x81, 0x01, 0x5B, 0xA8, 0xF6, 0xE4, 0xEF, 0xF4, 0xE1, 0xE3, 0xE3, 0xE5, 0xEE, 0x74, 0x80,
    0x1E, 0x65, 0x64, 0x05, 0xA9, 0x0E, 0xA9, 0x17, 0xA9, 0x1D, 0xA9, 0x2B, 0xA9, 0x3B, 0xE1, 0xF2,
    0xE1, 0xE2, 0xE9, 0x63, 0x80, 0x06, 0x35, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x38, 0xE6, 0xE9, 0xEE,
    0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE, 0xBA, 0xE9, 0xEE, 0xE9, 0xF4, 0xE9,
    0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE, 0xBB, 0xED, 0xE5, 0xE4, 0xE9, 0xE1,
    0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE, 0xBC, 0xE7, 0x75, 0x02, 0xA9, 0x51, 0xA9,
    0x5A, 0xEA, 0xE1, 0xF2, 0xE1, 0xF4, 0x69, 0x80, 0x0A, 0xB8, 0xF2, 0xED, 0xF5, 0xEB, 0xE8, 0x69,
    0x80, 0x0A, 0x38, 0xE8, 0xE9, 0xF2, 0xE1, 0xE7, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0x55, 0xEB, 0xE1,
    0xF4, 0xE1, 0xEB, 0xE1, 0xEE, 0x61, 0x81, 0x30, 0xB5, 0xA9, 0x7B, 0xE8, 0xE1, 0xEC, 0xE6, 0xF7,
    0xE9, 0xE4, 0xF4, 0x68, 0x80, 0xFF, 0x7B, 0xEC, 0xEC, 0xE1, 0xEC, 0xEC, 0xE1, 0xE8, 0xEF, 0xF5,
    0xE1, 0xEC, 0xE1, 0xF9, 0xE8, 0xE5, 0xF7, 0xE1, 0xF3, 0xE1, 0xEC, 0xEC, 0xE1, 0xED, 0xE1, 0xF2,
    0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFD, 0xFA, 0xED, 0xE5, 0xEB, 0x68, 0x82, 0x05, 0xE1, 0xA9, 0xB2,
    0xA9, 0xC6, 0xE4, 0xE1, 0xE7, 0xE5, 0xF3, 0x68, 0x81, 0xFB, 0x41, 0xA9, 0xBD, 0xE8, 0xE5, 0xE2,
    0xF2, 0xE5, 0x77, 0x80, 0xFB, 0x41, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xE1, 0xF2,
    0x61, 0x05, 0xA9, 0xDC, 0xAA, 0x26, 0xAA, 0x2E, 0xAA, 0x60, 0xAA, 0x68, 0x61, 0x05, 0xA9, 0xE8,
    0xA9, 0xF0, 0xA9, 0xF8, 0xAA, 0x17, 0xAA, 0x1F, 0xE1, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x32,
    0xE5, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x41, 0xE9, 0xED, 0xE1, 0xE9, 0x6D, 0x02, 0xAA, 0x02,
    0xAA, 0x0D, 0xE1, 0xEC, 0xE1, 0xE9, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x44, 0xF5, 0xE1, 0xEE,
    0xF4, 0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x43, 0xED, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x33, 0xF4,
    0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x30, 0xE5, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x40, 0x69, 0x03,
    0xAA, 0x36, 0xAA, 0x4E, 0xAA, 0x59, 0x69, 0x02, 0xAA, 0x3C, 0xAA, 0x47, 0xEC, 0xE5, 0xE6, 0xF4,
    0xF4, 0xE8, 0xE1, 0x69, 0x80, 0xF8, 0x86, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x35, 0xEC, 0xE5,
    0xE6, 0xF4, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0xF8, 0x85, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x34,
    0xEF, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x42, 0x75, 0x03, 0xAA, 0x70, 0xAA, 0xA2, 0xAA, 0xA9,
    0x65, 0x03, 0xAA, 0x78, 0xAA, 0x90, 0xAA, 0x9B, 0x65, 0x02, 0xAA, 0x7E, 0xAA, 0x89, 0xEC, 0xE5,
    0xE6, 0xF4, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0xF8, 0x88, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x37,
    0xEC, 0xE5, 0xE6, 0xF4, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0xF8, 0x87, 0xF4, 0xE8, 0xE1, 0x69, 0x80,
    0x0E, 0x36, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x38, 0xF5, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0x0E,
    0x39, 0xE2, 0xEF, 0xF0, 0xEF, 0xED, 0xEF, 0xE6, 0x6F, 0x80, 0x31, 0x19, 0x63, 0x05, 0xAA, 0xC8,
    0xAA, 0xDD, 0xAA, 0xE6, 0xAB, 0x17, 0xAB, 0x2D, 0xE1, 0xF2, 0xEF, 0x6E, 0x81, 0x01, 0x61, 0xAA,
    0xD1, 0xE4, 0xEF, 0xF4, 0xE1, 0xE3, 0xE3, 0xE5, 0xEE, 0x74, 0x80, 0x1E, 0x67, 0xE5, 0xE4, 0xE9,
    0xEC, 0xEC, 0x61, 0x80, 0x01, 0x5F, 0xE8, 0xF7, 0x61, 0x83, 0x02, 0x59, 0xAA, 0xF2, 0xAA, 0xFD,
    0xAB, 0x10, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0xD9, 0xE4, 0xE9, 0xE5,
    0xF2, 0xE5, 0xF3, 0xE9, 0xF3, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0xDB,
    0xE8, 0xEF, 0xEF, 0x6B, 0x80, 0x02, 0x5A, 0xE9, 0xF2, 0x63, 0x02, 0xAB, 0x1F, 0xAB, 0x24, 0xEC,
    0x65, 0x80, 0x24, 0xE2, 0xF5, 0xED, 0xE6, 0xEC, 0xE5, 0x78, 0x80, 0x01, 0x5D, 0xEF, 0xED, 0xED,
    0xE1, 0xE1, 0xE3, 0xE3, 0xE5, 0xEE, 0x74, 0x80, 0x02, 0x19, 0xE4, 0xEF, 0x74, 0x02, 0xAB, 0x42,
    0xAB, 0x4B, 0xE1, 0xE3, 0xE3, 0xE5, 0xEE, 0x74, 0x80, 0x1E, 0x61, 0xE2, 0xE5, 0xEC, 0xEF, 0x77,
    0x81, 0x1E, 0x63, 0xAB, 0x55, 0xE4, 0xEF, 0xF4, 0xE1, 0xE3, 0xE3, 0xE5, 0xEE, 0x74, 0x80, 0x1E,
    0x69, 0x65, 0x09, 0xAB, 0x75, 0xAB, 0x85, 0xAB, 0xA8, 0xAB, 0xE9, 0xAC, 0x50, 0xAC, 0x6B, 0xAC,
    0x84, 0xAC, 0xD5, 0xAC, 0xF0, 0xE1, 0xE7, 0xF5, 0xEC, 0xEC, 0xE2, 0xE5, 0xEC, 0xEF, 0xF7, 0xE3,
    0xED, 0x62, 0x80, 0x03, 0x3C, 0x63, 0x02, 0xAB, 0x8B, 0xAB, 0xA1, 0xEF, 0xEE, 0x64, 0x81, 0x20,
    0x33, 0xAB, 0x93, 0xF4, 0xEF, 0xEE, 0xE5, 0xE3, 0xE8, 0xE9, 0xEE, 0xE5, 0xF3, 0x65, 0x80, 0x02,
    0xCA, 0xF4, 0xE9, 0xEF, 0x6E, 0x80, 0x00, 0xA7, 0xE5, 0x6E, 0x04, 0xAB, 0xB3, 0xAB, 0xBC, 0xAB,
    0xCA, 0xAB, 0xDA, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0x06, 0x33, 0xE6, 0xE9, 0xEE, 0xE1,
    0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE, 0xB2, 0xE9, 0xEE, 0xE9, 0xF4, 0xE9, 0xE1,
    0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE, 0xB3, 0xED, 0xE5, 0xE4, 0xE9, 0xE1, 0xEC,
    0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE, 0xB4, 0xE7, 0xEF, 0x6C, 0x87, 0x05, 0xB6, 0xAB,
    0xFD, 0xAC, 0x0B, 0xAC, 0x10, 0xAC, 0x19, 0xAC, 0x28, 0xAC, 0x38, 0xAC, 0x43, 0x31, 0x02, 0xAC,
    0x03, 0xAC, 0x07, 0x33, 0x80, 0x05, 0xB6, 0x66, 0x80, 0x05, 0xB6, 0xB2, 0x63, 0x80, 0x05, 0xB6,
    0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xB6, 0xEE, 0xE1, 0xF2, 0xF2, 0xEF, 0xF7, 0xE8,
    0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xB6, 0xF1, 0xF5, 0xE1, 0xF2, 0xF4, 0xE5, 0xF2, 0xE8,
    0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xB6, 0xF4, 0xE1, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77,
    0x80, 0x05, 0x92, 0xF7, 0xE9, 0xE4, 0xE5, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xB6,
    0x68, 0x02, 0xAC, 0x56, 0xAC, 0x61, 0xE1, 0xF2, 0xED, 0xE5, 0xEE, 0xE9, 0xE1, 0x6E, 0x80, 0x05,
    0x7D, 0xE9, 0xF2, 0xE1, 0xE7, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0x5B, 0xEB, 0xE1, 0xF4, 0xE1, 0xEB,
    0xE1, 0xEE, 0x61, 0x81, 0x30, 0xBB, 0xAC, 0x78, 0xE8, 0xE1, 0xEC, 0xE6, 0xF7, 0xE9, 0xE4, 0xF4,
    0x68, 0x80, 0xFF, 0x7E, 0xED, 0x69, 0x02, 0xAC, 0x8B, 0xAC, 0xB6, 0xE3, 0xEF, 0xEC, 0xEF, 0x6E,
    0x83, 0x00, 0x3B, 0xAC, 0x99, 0xAC, 0xA2, 0xAC, 0xAE, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80,
    0x06, 0x1B, 0xED, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80, 0xFF, 0x1B, 0xF3, 0xED,
    0xE1, 0xEC, 0x6C, 0x80, 0xFE, 0x54, 0xF6, 0xEF, 0xE9, 0xE3, 0xE5, 0xE4, 0xED, 0xE1, 0xF2, 0xEB,
    0xEB, 0xE1, 0xEE, 0x61, 0x81, 0x30, 0x9C, 0xAC, 0xC9, 0xE8, 0xE1, 0xEC, 0xE6, 0xF7, 0xE9, 0xE4,
    0xF4, 0x68, 0x80, 0xFF, 0x9F, 0xEE, 0x74, 0x02, 0xAC, 0xDC, 0xAC, 0xE6, 0xE9, 0xF3, 0xF1, 0xF5,
    0xE1, 0xF2, 0x65, 0x80, 0x33, 0x22, 0xEF, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0x23,
    0xF6, 0xE5, 0x6E, 0x8E, 0x00, 0x37, 0xAD, 0x12, 0xAD, 0x1B, 0xAD, 0x25, 0xAD, 0x43, 0xAD, 0x4A,
    0xAD, 0x54, 0xAD, 0x6D, 0xAD, 0x88, 0xAD, 0xAA, 0xAD, 0xB6, 0xAD, 0xC1, 0xAD, 0xE2, 0xAD, 0xEA,
    0xAD, 0xF5, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0x06, 0x67, 0xE2, 0xE5, 0xEE, 0xE7, 0xE1,
    0xEC, 0x69, 0x80, 0x09, 0xED, 0xE3, 0xE9, 0xF2, 0xE3, 0xEC, 0x65, 0x81, 0x24, 0x66, 0xAD, 0x30,
    0xE9, 0xEE, 0xF6, 0xE5, 0xF2, 0xF3, 0xE5, 0xF3, 0xE1, 0xEE, 0xF3, 0xF3, 0xE5, 0xF2, 0xE9, 0x66,
    0x80, 0x27, 0x90, 0xE4, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x6D, 0xE5, 0xE9, 0xE7, 0xE8, 0xF4, 0xE8,
    0x73, 0x80, 0x21, 0x5E, 0xE7, 0x75, 0x02, 0xAD, 0x5B, 0xAD, 0x64, 0xEA, 0xE1, 0xF2, 0xE1, 0xF4,
    0x69, 0x80, 0x0A, 0xED, 0xF2, 0xED, 0xF5, 0xEB, 0xE8, 0x69, 0x80, 0x0A, 0x6D, 0xE8, 0x61, 0x02,
    0xAD, 0x74, 0xAD, 0x7F, 0xE3, 0xEB, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0x06, 0x67, 0xEE,
    0xE7, 0xFA, 0xE8, 0xEF, 0x75, 0x80, 0x30, 0x27, 0x69, 0x02, 0xAD, 0x8E, 0xAD, 0xA0, 0xE4, 0xE5,
    0xEF, 0xE7, 0xF2, 0xE1, 0xF0, 0xE8, 0xE9, 0xE3, 0xF0, 0xE1, 0xF2, 0xE5, 0x6E, 0x80, 0x32, 0x26,
    0xEE, 0xE6, 0xE5, 0xF2, 0xE9, 0xEF, 0x72, 0x80, 0x20, 0x87, 0xED, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0,
    0xE1, 0xE3, 0x65, 0x80, 0xFF, 0x17, 0xEF, 0xEC, 0xE4, 0xF3, 0xF4, 0xF9, 0xEC, 0x65, 0x80, 0xF7,
    0x37, 0x70, 0x02, 0xAD, 0xC7, 0xAD, 0xCE, 0xE1, 0xF2, 0xE5, 0x6E, 0x80, 0x24, 0x7A, 0xE5, 0x72,
    0x02, 0xAD, 0xD5, 0xAD, 0xDB, 0xE9, 0xEF, 0x64, 0x80, 0x24, 0x8E, 0xF3, 0xE9, 0xE1, 0x6E, 0x80,
    0x06, 0xF7, 0xF2, 0xEF, 0xED, 0xE1, 0x6E, 0x80, 0x21, 0x76, 0xF3, 0xF5, 0xF0, 0xE5, 0xF2, 0xE9,
    0xEF, 0x72, 0x80, 0x20, 0x77, 0x74, 0x02, 0xAD, 0xFB, 0xAE, 0x21, 0xE5, 0xE5, 0x6E, 0x02, 0xAE,
    0x03, 0xAE, 0x0C, 0xE3, 0xE9, 0xF2, 0xE3, 0xEC, 0x65, 0x80, 0x24, 0x70, 0x70, 0x02, 0xAE, 0x12,
    0xAE, 0x19, 0xE1, 0xF2, 0xE5, 0x6E, 0x80, 0x24, 0x84, 0xE5, 0xF2, 0xE9, 0xEF, 0x64, 0x80, 0x24,
    0x98, 0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x57, 0xE6, 0xF4, 0xE8, 0xF9, 0xF0, 0xE8, 0xE5, 0x6E, 0x80,
    0x00, 0xAD, 0x68, 0x07, 0xAE, 0x42, 0xAF, 0x28, 0xAF, 0x33, 0xAF, 0x41, 0xB0, 0x0A, 0xB0, 0x17,
    0xB0, 0xBB, 0x61, 0x06, 0xAE, 0x50, 0xAE, 0x5B, 0xAE, 0x65, 0xAE, 0x70, 0xAE, 0xFF, 0xAF, 0x18,
    0xE1, 0xF2, 0xED, 0xE5, 0xEE, 0xE9, 0xE1, 0x6E, 0x80, 0x05, 0x77, 0xE2, 0xE5, 0xEE, 0xE7, 0xE1,
    0xEC, 0x69, 0x80, 0x09, 0xB6, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x48,
    0x64, 0x02, 0xAE, 0x76, 0xAE, 0xD6, 0xE4, 0x61, 0x04, 0xAE, 0x81, 0xAE, 0x8A, 0xAE, 0xA9, 0xAE,
    0xB7, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0x06, 0x51, 0xE4, 0xE1, 0xED, 0xED, 0x61, 0x02,
    0xAE, 0x94, 0xAE, 0x9D, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFC, 0x61, 0xF4, 0xE1, 0xEE,
    0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFC, 0x5E, 0xE6, 0xE1, 0xF4, 0xE8, 0xE1, 0xE1, 0xF2,
    0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFC, 0x60, 0xEB, 0xE1, 0xF3, 0xF2, 0x61, 0x02, 0xAE, 0xC1, 0xAE,
    0xCA, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFC, 0x62, 0xF4, 0xE1, 0xEE, 0xE1, 0xF2, 0xE1,
    0xE2, 0xE9, 0x63, 0x80, 0xFC, 0x5F, 0x65, 0x84, 0x25, 0x92, 0xAE, 0xE2, 0xAE, 0xE9, 0xAE, 0xF1,
    0xAE, 0xFA, 0xE4, 0xE1, 0xF2, 0x6B, 0x80, 0x25, 0x93, 0xEC, 0xE9, 0xE7, 0xE8, 0x74, 0x80, 0x25,
    0x91, 0xED, 0xE5, 0xE4, 0xE9, 0xF5, 0x6D, 0x80, 0x25, 0x92, 0xF6, 0x61, 0x80, 0x09, 0x36, 0xE7,
    0x75, 0x02, 0xAF, 0x06, 0xAF, 0x0F, 0xEA, 0xE1, 0xF2, 0xE1, 0xF4, 0x69, 0x80, 0x0A, 0xB6, 0xF2,
    0xED, 0xF5, 0xEB, 0xE8, 0x69, 0x80, 0x0A, 0x36, 0xEC, 0xF3, 0xE8, 0xE5, 0xEC, 0xE5, 0xF4, 0xE8,
    0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0x93, 0xE2, 0xEF, 0xF0, 0xEF, 0xED, 0xEF, 0xE6, 0x6F,
    0x80, 0x31, 0x15, 0xE3, 0xE8, 0xE1, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04,
    0x49, 0x65, 0x04, 0xAF, 0x4B, 0xAF, 0x8C, 0xAF, 0x96, 0xAF, 0xA7, 0xE5, 0x6E, 0x04, 0xAF, 0x56,
    0xAF, 0x5F, 0xAF, 0x6D, 0xAF, 0x7D, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0x06, 0x34, 0xE6,
    0xE9, 0xEE, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE, 0xB6, 0xE9, 0xEE, 0xE9,
    0xF4, 0xE9, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE, 0xB7, 0xED, 0xE5, 0xE4,
    0xE9, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE, 0xB8, 0xE9, 0xE3, 0xEF, 0xF0,
    0xF4, 0xE9, 0x63, 0x80, 0x03, 0xE3, 0xF1, 0xE5, 0x6C, 0x81, 0x20, 0xAA, 0xAF, 0x9E, 0xE8, 0xE5,
    0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x20, 0xAA, 0xF6, 0x61, 0x86, 0x05, 0xB0, 0xAF, 0xB8, 0xAF, 0xC7,
    0xAF, 0xD5, 0xAF, 0xDE, 0xAF, 0xED, 0xAF, 0xFD, 0x31, 0x02, 0xAF, 0xBE, 0xAF, 0xC3, 0xB1, 0x35,
    0x80, 0x05, 0xB0, 0x35, 0x80, 0x05, 0xB0, 0x32, 0x02, 0xAF, 0xCD, 0xAF, 0xD1, 0x32, 0x80, 0x05,
    0xB0, 0x65, 0x80, 0x05, 0xB0, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xB0, 0xEE, 0xE1,
    0xF2, 0xF2, 0xEF, 0xF7, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xB0, 0xF1, 0xF5, 0xE1,
    0xF2, 0xF4, 0xE5, 0xF2, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xB0, 0xF7, 0xE9, 0xE4,
    0xE5, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xB0, 0xE8, 0xE1, 0xE3, 0xF9, 0xF2, 0xE9,
    0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0xBB, 0x69, 0x02, 0xB0, 0x1D, 0xB0, 0x28, 0xED, 0xE1, 0xE3,
    0xEF, 0xF0, 0xF4, 0xE9, 0x63, 0x80, 0x03, 0xED, 0x6E, 0x83, 0x05, 0xE9, 0xB0, 0x32, 0xB0, 0x85,
    0xB0, 0x8E, 0x64, 0x02, 0xB0, 0x38, 0xB0, 0x7A, 0xE1, 0xE7, 0xE5, 0xF3, 0x68, 0x82, 0xFB, 0x49,
    0xB0, 0x44, 0xB0, 0x4D, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0xFB, 0x49, 0x73, 0x02, 0xB0,
    0x53, 0xB0, 0x67, 0xE8, 0xE9, 0xEE, 0xE4, 0xEF, 0x74, 0x81, 0xFB, 0x2C, 0xB0, 0x5E, 0xE8, 0xE5,
    0xE2, 0xF2, 0xE5, 0x77, 0x80, 0xFB, 0x2C, 0xE9, 0xEE, 0xE4, 0xEF, 0x74, 0x81, 0xFB, 0x2D, 0xB0,
    0x71, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0xFB, 0x2D, 0xEF, 0xF4, 0xE8, 0xE5, 0xE2, 0xF2,
    0xE5, 0x77, 0x80, 0x05, 0xC1, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xE9, 0x73, 0x02,
    0xB0, 0x94, 0xB0, 0xA8, 0xE8, 0xE9, 0xEE, 0xE4, 0xEF, 0x74, 0x81, 0xFB, 0x2A, 0xB0, 0x9F, 0xE8,
    0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0xFB, 0x2A, 0xE9, 0xEE, 0xE4, 0xEF, 0x74, 0x81, 0xFB, 0x2B,
    0xB0, 0xB2, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0xFB, 0x2B, 0xEF, 0xEF, 0x6B, 0x80, 0x02,
    0x82, 0x69, 0x08, 0xB0, 0xD3, 0xB0, 0xFF, 0xB1, 0x0A, 0xB1, 0x23, 0xB1, 0x41, 0xB1, 0x49, 0xB1,
    0x56, 0xB2, 0x01, 0xE7, 0xED, 0x61, 0x83, 0x03, 0xC3, 0xB0, 0xDF, 0xB0, 0xE3, 0xB0, 0xEB, 0x31,
    0x80, 0x03, 0xC2, 0xE6, 0xE9, 0xEE, 0xE1, 0x6C, 0x80, 0x03, 0xC2, 0xEC, 0xF5, 0xEE, 0xE1, 0xF4,
    0xE5, 0xF3, 0xF9, 0xED, 0xE2, 0xEF, 0xEC, 0xE7, 0xF2, 0xE5, 0xE5, 0x6B, 0x80, 0x03, 0xF2, 0xE8,
    0xE9, 0xF2, 0xE1, 0xE7, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0x57, 0xEB, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1,
    0xEE, 0x61, 0x81, 0x30, 0xB7, 0xB1, 0x17, 0xE8, 0xE1, 0xEC, 0xE6, 0xF7, 0xE9, 0xE4, 0xF4, 0x68,
    0x80, 0xFF, 0x7C, 0xEC, 0xF5, 0x71, 0x02, 0xB1, 0x2B, 0xB1, 0x34, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5,
    0x77, 0x80, 0x05, 0xBD, 0xEC, 0xE5, 0xE6, 0xF4, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05,
    0xBD, 0xED, 0xE9, 0xEC, 0xE1, 0x72, 0x80, 0x22, 0x3C, 0xEE, 0xE4, 0xEF, 0xF4, 0xE8, 0xE5, 0xE2,
    0xF2, 0xE5, 0x77, 0x80, 0x05, 0xC2, 0xEF, 0x73, 0x06, 0xB1, 0x65, 0xB1, 0x88, 0xB1, 0xA8, 0xB1,
    0xC4, 0xB1, 0xD2, 0xB1, 0xF2, 0x61, 0x02, 0xB1, 0x6B, 0xB1, 0x7A, 0xE3, 0xE9, 0xF2, 0xE3, 0xEC,
    0xE5, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x32, 0x74, 0xF0, 0xE1, 0xF2, 0xE5, 0xEE, 0xEB,
    0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x32, 0x14, 0xE3, 0x69, 0x02, 0xB1, 0x8F, 0xB1, 0x9B, 0xE5,
    0xF5, 0xE3, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31, 0x7E, 0xF2, 0xE3, 0xEC, 0xE5, 0xEB,
    0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x32, 0x66, 0x6B, 0x02, 0xB1, 0xAE, 0xB1, 0xBC, 0xE9, 0xF9,
    0xE5, 0xEF, 0xEB, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31, 0x7A, 0xEF, 0xF2, 0xE5, 0xE1,
    0x6E, 0x80, 0x31, 0x45, 0xEE, 0xE9, 0xE5, 0xF5, 0xEE, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80,
    0x31, 0x7B, 0x70, 0x02, 0xB1, 0xD8, 0xB1, 0xE5, 0xE1, 0xF2, 0xE5, 0xEE, 0xEB, 0xEF, 0xF2, 0xE5,
    0xE1, 0x6E, 0x80, 0x32, 0x06, 0xE9, 0xE5, 0xF5, 0xF0, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80,
    0x31, 0x7D, 0xF4, 0xE9, 0xEB, 0xE5, 0xF5, 0xF4, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31,
    0x7C, 0x78, 0x8D, 0x00, 0x36, 0xB2, 0x1F, 0xB2, 0x28, 0xB2, 0x32, 0xB2, 0x50, 0xB2, 0x57, 0xB2,
    0x70, 0xB2, 0x8B, 0xB2, 0xAD, 0xB2, 0xB9, 0xB2, 0xC4, 0xB2, 0xE5, 0xB2, 0xED, 0xB2, 0xF8, 0xE1,
    0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0x06, 0x66, 0xE2, 0xE5, 0xEE, 0xE7, 0xE1, 0xEC, 0x69, 0x80,
    0x09, 0xEC, 0xE3, 0xE9, 0xF2, 0xE3, 0xEC, 0x65, 0x81, 0x24, 0x65, 0xB2, 0x3D, 0xE9, 0xEE, 0xF6,
    0xE5, 0xF2, 0xF3, 0xE5, 0xF3, 0xE1, 0xEE, 0xF3, 0xF3, 0xE5, 0xF2, 0xE9, 0x66, 0x80, 0x27, 0x8F,
    0xE4, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x6C, 0xE7, 0x75, 0x02, 0xB2, 0x5E, 0xB2, 0x67, 0xEA, 0xE1,
    0xF2, 0xE1, 0xF4, 0x69, 0x80, 0x0A, 0xEC, 0xF2, 0xED, 0xF5, 0xEB, 0xE8, 0x69, 0x80, 0x0A, 0x6C,
    0xE8, 0x61, 0x02, 0xB2, 0x77, 0xB2, 0x82, 0xE3, 0xEB, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80,
    0x06, 0x66, 0xEE, 0xE7, 0xFA, 0xE8, 0xEF, 0x75, 0x80, 0x30, 0x26, 0x69, 0x02, 0xB2, 0x91, 0xB2,
    0xA3, 0xE4, 0xE5, 0xEF, 0xE7, 0xF2, 0xE1, 0xF0, 0xE8, 0xE9, 0xE3, 0xF0, 0xE1, 0xF2, 0xE5, 0x6E,
    0x80, 0x32, 0x25, 0xEE, 0xE6, 0xE5, 0xF2, 0xE9, 0xEF, 0x72, 0x80, 0x20, 0x86, 0xED, 0xEF, 0xEE,
    0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80, 0xFF, 0x16, 0xEF, 0xEC, 0xE4, 0xF3, 0xF4, 0xF9, 0xEC,
    0x65, 0x80, 0xF7, 0x36, 0x70, 0x02, 0xB2, 0xCA, 0xB2, 0xD1, 0xE1, 0xF2, 0xE5, 0x6E, 0x80, 0x24,
    0x79, 0xE5, 0x72, 0x02, 0xB2, 0xD8, 0xB2, 0xDE, 0xE9, 0xEF, 0x64, 0x80, 0x24, 0x8D, 0xF3, 0xE9,
    0xE1, 0x6E, 0x80, 0x06, 0xF6, 0xF2, 0xEF, 0xED, 0xE1, 0x6E, 0x80, 0x21, 0x75, 0xF3, 0xF5, 0xF0,
    0xE5, 0xF2, 0xE9, 0xEF, 0x72, 0x80, 0x20, 0x76, 0x74, 0x02, 0xB2, 0xFE, 0xB3, 0x45, 0xE5, 0xE5,
    0x6E, 0x02, 0xB3, 0x06, 0xB3, 0x30, 0x63, 0x02, 0xB3, 0x0C, 0xB3, 0x14, 0xE9, 0xF2, 0xE3, 0xEC,
    0x65, 0x80, 0x24, 0x6F, 0xF5, 0xF2, 0xF2, 0xE5, 0xEE, 0xE3, 0xF9, 0xE4, 0xE5, 0xEE, 0xEF, 0xED,
    0xE9, 0xEE, 0xE1, 0xF4, 0xEF, 0xF2, 0xE2, 0xE5, 0xEE, 0xE7, 0xE1, 0xEC, 0x69, 0x80, 0x09, 0xF9,
    0x70, 0x02, 0xB3, 0x36, 0xB3, 0x3D, 0xE1, 0xF2, 0xE5, 0x6E, 0x80, 0x24, 0x83, 0xE5, 0xF2, 0xE9,
    0xEF, 0x64, 0x80, 0x24, 0x97, 0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x56, 0x6C, 0x02, 0xB3, 0x51, 0xB3,
    0x65, 0xE1, 0xF3, 0x68, 0x81, 0x00, 0x2F, 0xB3, 0x59, 0xED, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1,
    0xE3, 0x65, 0x80, 0xFF, 0x0F, 0xEF, 0xEE, 0x67, 0x81, 0x01, 0x7F, 0xB3, 0x6D, 0xE4, 0xEF, 0xF4,
    0xE1, 0xE3, 0xE3, 0xE5, 0xEE, 0x74, 0x80, 0x1E, 0x9B, 0x6D, 0x02, 0xB3, 0x7F, 0xB3, 0x89, 0xE9,
    0xEC, 0xE5, 0xE6, 0xE1, 0xE3, 0x65, 0x80, 0x26, 0x3A, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3,
    0x65, 0x80, 0xFF, 0x53, 0x6F, 0x06, 0xB3, 0xA2, 0xB3, 0xD4, 0xB3, 0xDF, 0xB3, 0xF8, 0xB4, 0x25,
    0xB4, 0x30, 0x66, 0x02, 0xB3, 0xA8, 0xB3, 0xB6, 0xF0, 0xE1, 0xF3, 0xF5, 0xF1, 0xE8, 0xE5, 0xE2,
    0xF2, 0xE5, 0x77, 0x80, 0x05, 0xC3, 0x74, 0x02, 0xB3, 0xBC, 0xB3, 0xC5, 0xE8, 0xF9, 0xF0, 0xE8,
    0xE5, 0x6E, 0x80, 0x00, 0xAD, 0xF3, 0xE9, 0xE7, 0xEE, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9,
    0x63, 0x80, 0x04, 0x4C, 0xE8, 0xE9, 0xF2, 0xE1, 0xE7, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0x5D, 0xEB,
    0xE1, 0xF4, 0xE1, 0xEB, 0xE1, 0xEE, 0x61, 0x81, 0x30, 0xBD, 0xB3, 0xEC, 0xE8, 0xE1, 0xEC, 0xE6,
    0xF7, 0xE9, 0xE4, 0xF4, 0x68, 0x80, 0xFF, 0x7F, 0xEC, 0xE9, 0xE4, 0xF5, 0x73, 0x02, 0xB4, 0x02,
    0xB4, 0x13, 0xEC, 0xEF, 0xEE, 0xE7, 0xEF, 0xF6, 0xE5, 0xF2, 0xEC, 0xE1, 0xF9, 0xE3, 0xED, 0x62,
    0x80, 0x03, 0x38, 0xF3, 0xE8, 0xEF, 0xF2, 0xF4, 0xEF, 0xF6, 0xE5, 0xF2, 0xEC, 0xE1, 0xF9, 0xE3,
    0xED, 0x62, 0x80, 0x03, 0x37, 0xF2, 0xF5, 0xF3, 0xE9, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x29,
    0x73, 0x03, 0xB4, 0x38, 0xB4, 0x42, 0xB4, 0x4A, 0xE1, 0xEC, 0xE1, 0xF4, 0xE8, 0xE1, 0x69, 0x80,
    0x0E, 0x28, 0xEF, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x0B, 0xF5, 0xE1, 0xF4, 0xE8, 0xE1, 0x69,
    0x80, 0x0E, 0x2A, 0xF0, 0x61, 0x03, 0xB4, 0x5C, 0xB4, 0x70, 0xB4, 0x90, 0xE3, 0x65, 0x81, 0x00,
    0x20, 0xB4, 0x63, 0xE8, 0xE1, 0xE3, 0xEB, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0x00, 0x20,
    0xE4, 0x65, 0x81, 0x26, 0x60, 0xB4, 0x77, 0xF3, 0xF5, 0xE9, 0x74, 0x02, 0xB4, 0x80, 0xB4, 0x88,
    0xE2, 0xEC, 0xE1, 0xE3, 0x6B, 0x80, 0x26, 0x60, 0xF7, 0xE8, 0xE9, 0xF4, 0x65, 0x80, 0x26, 0x64,
    0xF2, 0xE5, 0x6E, 0x80, 0x24, 0xAE, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x0B, 0xB4, 0xB2, 0xB4, 0xBD,
    0xB4, 0xCB, 0xB4, 0xE4, 0xB4, 0xF5, 0xB5, 0x0F, 0xB5, 0x1E, 0xB5, 0x3F, 0xB5, 0x5A, 0xB5, 0x92,
    0xB5, 0xA1, 0xE2, 0xE5, 0xEC, 0xEF, 0xF7, 0xE3, 0xED, 0x62, 0x80, 0x03, 0x3B, 0x63, 0x02, 0xB4,
    0xC3, 0xB4, 0xC7, 0x63, 0x80, 0x33, 0xC4, 0x6D, 0x80, 0x33, 0x9D, 0xE4, 0xE9, 0xE1, 0xE7, 0xEF,
    0xEE, 0xE1, 0xEC, 0xE3, 0xF2, 0xEF, 0xF3, 0xF3, 0xE8, 0xE1, 0xF4, 0xE3, 0xE8, 0xE6, 0xE9, 0xEC,
    0x6C, 0x80, 0x25, 0xA9, 0xE8, 0xEF, 0xF2, 0xE9, 0xFA, 0xEF, 0xEE, 0xF4, 0xE1, 0xEC, 0xE6, 0xE9,
    0xEC, 0x6C, 0x80, 0x25, 0xA4, 0x6B, 0x02, 0xB4, 0xFB, 0xB4, 0xFF, 0x67, 0x80, 0x33, 0x8F, 0x6D,
    0x81, 0x33, 0x9E, 0xB5, 0x05, 0xE3, 0xE1, 0xF0, 0xE9, 0xF4, 0xE1, 0x6C, 0x80, 0x33, 0xCE, 0x6C,
    0x02, 0xB5, 0x15, 0xB5, 0x19, 0x6E, 0x80, 0x33, 0xD1, 0xEF, 0x67, 0x80, 0x33, 0xD2, 0x6D, 0x04,
    0xB5, 0x28, 0xB5, 0x2C, 0xB5, 0x31, 0xB5, 0x35, 0x67, 0x80, 0x33, 0x8E, 0xE9, 0x6C, 0x80, 0x33,
    0xD5, 0x6D, 0x80, 0x33, 0x9C, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0xE5, 0x64, 0x80, 0x33, 0xA1, 0xEF,
    0xF2, 0xF4, 0xE8, 0xEF, 0xE7, 0xEF, 0xEE, 0xE1, 0xEC, 0xE3, 0xF2, 0xEF, 0xF3, 0xF3, 0xE8, 0xE1,
    0xF4, 0xE3, 0xE8, 0xE6, 0xE9, 0xEC, 0x6C, 0x80, 0x25, 0xA6, 0xF5, 0xF0, 0xF0, 0xE5, 0x72, 0x02,
    0xB5, 0x64, 0xB5, 0x7B, 0xEC, 0xE5, 0xE6, 0xF4, 0xF4, 0xEF, 0xEC, 0xEF, 0xF7, 0xE5, 0xF2, 0xF2,
    0xE9, 0xE7, 0xE8, 0xF4, 0xE6, 0xE9, 0xEC, 0x6C, 0x80, 0x25, 0xA7, 0xF2, 0xE9, 0xE7, 0xE8, 0xF4,
    0xF4, 0xEF, 0xEC, 0xEF, 0xF7, 0xE5, 0xF2, 0xEC, 0xE5, 0xE6, 0xF4, 0xE6, 0xE9, 0xEC, 0x6C, 0x80,
    0x25, 0xA8, 0xF6, 0xE5, 0xF2, 0xF4, 0xE9, 0xE3, 0xE1, 0xEC, 0xE6, 0xE9, 0xEC, 0x6C, 0x80, 0x25,
    0xA5, 0xF7, 0xE8, 0xE9, 0xF4, 0xE5, 0xF7, 0xE9, 0xF4, 0xE8, 0xF3, 0xED, 0xE1, 0xEC, 0xEC, 0xE2,
    0xEC, 0xE1, 0xE3, 0x6B, 0x80, 0x25, 0xA3, 0xF2, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33,
    0xDB, 0x73, 0x02, 0xB5, 0xC7, 0xB6, 0x71, 0x61, 0x04, 0xB5, 0xD1, 0xB5, 0xDB, 0xB5, 0xE2, 0xB5,
    0xED, 0xE2, 0xE5, 0xEE, 0xE7, 0xE1, 0xEC, 0x69, 0x80, 0x09, 0xB7, 0xE4, 0xE5, 0xF6, 0x61, 0x80,
    0x09, 0x37, 0xE7, 0xF5, 0xEA, 0xE1, 0xF2, 0xE1, 0xF4, 0x69, 0x80, 0x0A, 0xB7, 0xEE, 0x67, 0x08,
    0xB6, 0x00, 0xB6, 0x0E, 0xB6, 0x1C, 0xB6, 0x2A, 0xB6, 0x39, 0xB6, 0x47, 0xB6, 0x55, 0xB6, 0x62,
    0xE3, 0xE9, 0xE5, 0xF5, 0xE3, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31, 0x49, 0xE8, 0xE9,
    0xE5, 0xF5, 0xE8, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31, 0x85, 0xE9, 0xE5, 0xF5, 0xEE,
    0xE7, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31, 0x80, 0xEB, 0xE9, 0xF9, 0xE5, 0xEF, 0xEB,
    0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31, 0x32, 0xEE, 0xE9, 0xE5, 0xF5, 0xEE, 0xEB, 0xEF,
    0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31, 0x65, 0xF0, 0xE9, 0xE5, 0xF5, 0xF0, 0xEB, 0xEF, 0xF2, 0xE5,
    0xE1, 0x6E, 0x80, 0x31, 0x43, 0xF3, 0xE9, 0xEF, 0xF3, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80,
    0x31, 0x46, 0xF4, 0xE9, 0xEB, 0xE5, 0xF5, 0xF4, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31,
    0x38, 0xF5, 0xF0, 0xE5, 0xF2, 0xE9, 0xEF, 0x72, 0x80, 0xF6, 0xF2, 0x74, 0x02, 0xB6, 0x81, 0xB6,
    0x98, 0xE5, 0xF2, 0xEC, 0xE9, 0xEE, 0x67, 0x81, 0x00, 0xA3, 0xB6, 0x8C, 0xED, 0xEF, 0xEE, 0xEF,
    0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80, 0xFF, 0xE1, 0xF2, 0xEF, 0xEB, 0x65, 0x02, 0xB6, 0xA1, 0xB6,
    0xB2, 0xEC, 0xEF, 0xEE, 0xE7, 0xEF, 0xF6, 0xE5, 0xF2, 0xEC, 0xE1, 0xF9, 0xE3, 0xED, 0x62, 0x80,
    0x03, 0x36, 0xF3, 0xE8, 0xEF, 0xF2, 0xF4, 0xEF, 0xF6, 0xE5, 0xF2, 0xEC, 0xE1, 0xF9, 0xE3, 0xED,
    0x62, 0x80, 0x03, 0x35, 0x75, 0x07, 0xB6, 0xD4, 0xB6, 0xF4, 0xB7, 0x0A, 0xB7, 0x15, 0xB7, 0x3E,
    0xB7, 0x48, 0xB7, 0x4C, 0xE2, 0xF3, 0xE5, 0x74, 0x82, 0x22, 0x82, 0xB6, 0xDF, 0xB6, 0xEA, 0xEE,
    0xEF, 0xF4, 0xE5, 0xF1, 0xF5, 0xE1, 0x6C, 0x80, 0x22, 0x8A, 0xEF, 0xF2, 0xE5, 0xF1, 0xF5, 0xE1,
    0x6C, 0x80, 0x22, 0x86, 0x63, 0x02, 0xB6, 0xFA, 0xB7, 0x02, 0xE3, 0xE5, 0xE5, 0xE4, 0x73, 0x80,
    0x22, 0x7B, 0xE8, 0xF4, 0xE8, 0xE1, 0x74, 0x80, 0x22, 0x0B, 0xE8, 0xE9, 0xF2, 0xE1, 0xE7, 0xE1,
    0xEE, 0x61, 0x80, 0x30, 0x59, 0x6B, 0x02, 0xB7, 0x1B, 0xB7, 0x33, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1,
    0xEE, 0x61, 0x81, 0x30, 0xB9, 0xB7, 0x27, 0xE8, 0xE1, 0xEC, 0xE6, 0xF7, 0xE9, 0xE4, 0xF4, 0x68,
    0x80, 0xFF, 0x7D, 0xF5, 0xEE, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0x06, 0x52, 0xED, 0xED,
    0xE1, 0xF4, 0xE9, 0xEF, 0x6E, 0x80, 0x22, 0x11, 0x6E, 0x80, 0x26, 0x3C, 0xF0, 0xE5, 0xF2, 0xF3,
    0xE5, 0x74, 0x82, 0x22, 0x83, 0xB7, 0x59, 0xB7, 0x64, 0xEE, 0xEF, 0xF4, 0xE5, 0xF1, 0xF5, 0xE1,
    0x6C, 0x80, 0x22, 0x8B, 0xEF, 0xF2, 0xE5, 0xF1, 0xF5, 0xE1, 0x6C, 0x80, 0x22, 0x87, 0xF6, 0xF3,
    0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0xDC, 0xF9, 0xEF, 0xF5, 0xF7, 0xE1, 0xE5, 0xF2, 0xE1,
    0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0x7C, 0x74, 0x90, 0x00, 0x74, 0xB7, 0xAD, 0xB8,
    0xB6, 0xB8, 0xCB, 0xB9, 0x5A, 0xB9, 0x82, 0xBB, 0xB2, 0xBF, 0x3C, 0xC0, 0x87, 0xC0, 0x93, 0xC0,
    0x9F, 0xC1, 0xC0, 0xC1, 0xD9, 0xC2, 0x2F, 0xC2, 0xE3, 0xC3, 0x9B, 0xC3, 0xF5, 0x61, 0x0A, 0xB7,
    0xC3, 0xB7, 0xCD, 0xB7, 0xE2, 0xB7, 0xE9, 0xB8, 0x02, 0xB8, 0x50, 0xB8, 0x61, 0xB8, 0x7A, 0xB8,
    0x88, 0xB8, 0x8C, 0xE2, 0xE5, 0xEE, 0xE7, 0xE1, 0xEC, 0x69, 0x80, 0x09, 0xA4, 0xE3, 0x6B, 0x02,
    0xB7, 0xD4, 0xB7, 0xDB, 0xE4, 0xEF, 0xF7, 0x6E, 0x80, 0x22, 0xA4, 0xEC, 0xE5, 0xE6, 0x74, 0x80,
    0x22, 0xA3, 0xE4, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x24, 0xE7, 0x75, 0x02, 0xB7, 0xF0, 0xB7, 0xF9,
    0xEA, 0xE1, 0xF2, 0xE1, 0xF4, 0x69, 0x80, 0x0A, 0xA4, 0xF2, 0xED, 0xF5, 0xEB, 0xE8, 0x69, 0x80,
    0x0A, 0x24, 0x68, 0x04, 0xB8, 0x0C, 0xB8, 0x15, 0xB8, 0x23, 0xB8, 0x41, 0xE1, 0xF2, 0xE1, 0xE2,
    0xE9, 0x63, 0x80, 0x06, 0x37, 0xE6, 0xE9, 0xEE, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63,
    0x80, 0xFE, 0xC2, 0x69, 0x02, 0xB8, 0x29, 0xB8, 0x38, 0xEE, 0xE9, 0xF4, 0xE9, 0xE1, 0xEC, 0xE1,
    0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE, 0xC3, 0xF2, 0xE1, 0xE7, 0xE1, 0xEE, 0x61, 0x80, 0x30,
    0x5F, 0xED, 0xE5, 0xE4, 0xE9, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE, 0xC4,
    0xE9, 0xF3, 0xF9, 0xEF, 0xF5, 0xE5, 0xF2, 0xE1, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33,
    0x7D, 0xEB, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1, 0xEE, 0x61, 0x81, 0x30, 0xBF, 0xB8, 0x6E, 0xE8, 0xE1,
    0xEC, 0xE6, 0xF7, 0xE9, 0xE4, 0xF4, 0x68, 0x80, 0xFF, 0x80, 0xF4, 0xF7, 0xE5, 0xE5, 0xEC, 0xE1,
    0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0x06, 0x40, 0x75, 0x80, 0x03, 0xC4, 0x76, 0x82, 0x05, 0xEA,
    0xB8, 0x94, 0xB8, 0xAD, 0xE4, 0xE1, 0xE7, 0xE5, 0x73, 0x81, 0xFB, 0x4A, 0xB8, 0x9E, 0x68, 0x81,
    0xFB, 0x4A, 0xB8, 0xA4, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0xFB, 0x4A, 0xE8, 0xE5, 0xE2,
    0xF2, 0xE5, 0x77, 0x80, 0x05, 0xEA, 0x62, 0x02, 0xB8, 0xBC, 0xB8, 0xC1, 0xE1, 0x72, 0x80, 0x01,
    0x67, 0xEF, 0xF0, 0xEF, 0xED, 0xEF, 0xE6, 0x6F, 0x80, 0x31, 0x0A, 0x63, 0x06, 0xB8, 0xD9, 0xB8,
    0xE0, 0xB8, 0xE7, 0xB8, 0xF0, 0xB9, 0x32, 0xB9, 0x4D, 0xE1, 0xF2, 0xEF, 0x6E, 0x80, 0x01, 0x65,
    0xE3, 0xF5, 0xF2, 0x6C, 0x80, 0x02, 0xA8, 0xE5, 0xE4, 0xE9, 0xEC, 0xEC, 0x61, 0x80, 0x01, 0x63,
    0xE8, 0xE5, 0x68, 0x04, 0xB8, 0xFC, 0xB9, 0x05, 0xB9, 0x13, 0xB9, 0x23, 0xE1, 0xF2, 0xE1, 0xE2,
    0xE9, 0x63, 0x80, 0x06, 0x86, 0xE6, 0xE9, 0xEE, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63,
    0x80, 0xFB, 0x7B, 0xE9, 0xEE, 0xE9, 0xF4, 0xE9, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63,
    0x80, 0xFB, 0x7C, 0xED, 0xE5, 0xE4, 0xE9, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80,
    0xFB, 0x7D, 0xE9, 0xF2, 0x63, 0x02, 0xB9, 0x3A, 0xB9, 0x3F, 0xEC, 0x65, 0x80, 0x24, 0xE3, 0xF5,
    0xED, 0xE6, 0xEC, 0xE5, 0xF8, 0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E, 0x71, 0xEF, 0xED, 0xED,
    0xE1, 0xE1, 0xE3, 0xE3, 0xE5, 0xEE, 0x74, 0x80, 0x01, 0x63, 0x64, 0x02, 0xB9, 0x60, 0xB9, 0x6A,
    0xE9, 0xE5, 0xF2, 0xE5, 0xF3, 0xE9, 0x73, 0x80, 0x1E, 0x97, 0xEF, 0x74, 0x02, 0xB9, 0x71, 0xB9,
    0x7A, 0xE1, 0xE3, 0xE3, 0xE5, 0xEE, 0x74, 0x80, 0x1E, 0x6B, 0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80,
    0x1E, 0x6D, 0x65, 0x09, 0xB9, 0x96, 0xB9, 0xA1, 0xB9, 0xB5, 0xBA, 0xBF, 0xBA, 0xD8, 0xBB, 0x18,
    0xBB, 0x5B, 0xBB, 0x60, 0xBB, 0x94, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04,
    0x42, 0xE4, 0xE5, 0xF3, 0xE3, 0xE5, 0xEE, 0xE4, 0xE5, 0xF2, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC,
    0xE9, 0x63, 0x80, 0x04, 0xAD, 0x68, 0x07, 0xB9, 0xC5, 0xB9, 0xCE, 0xB9, 0xDC, 0xBA, 0x04, 0xBA,
    0x22, 0xBA, 0x4B, 0xBA, 0xAD, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0x06, 0x2A, 0xE6, 0xE9,
    0xEE, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE, 0x96, 0xE8, 0xE1, 0xE8, 0x69,
    0x02, 0xB9, 0xE5, 0xB9, 0xF4, 0xEE, 0xE9, 0xF4, 0xE9, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9,
    0x63, 0x80, 0xFC, 0xA2, 0xF3, 0xEF, 0xEC, 0xE1, 0xF4, 0xE5, 0xE4, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9,
    0x63, 0x80, 0xFC, 0x0C, 0x69, 0x02, 0xBA, 0x0A, 0xBA, 0x19, 0xEE, 0xE9, 0xF4, 0xE9, 0xE1, 0xEC,
    0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE, 0x97, 0xF2, 0xE1, 0xE7, 0xE1, 0xEE, 0x61, 0x80,
    0x30, 0x66, 0xEA, 0xE5, 0xE5, 0xED, 0x69, 0x02, 0xBA, 0x2C, 0xBA, 0x3B, 0xEE, 0xE9, 0xF4, 0xE9,
    0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFC, 0xA1, 0xF3, 0xEF, 0xEC, 0xE1, 0xF4,
    0xE5, 0xE4, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFC, 0x0B, 0x6D, 0x02, 0xBA, 0x51, 0xBA,
    0x73, 0xE1, 0xF2, 0xE2, 0xF5, 0xF4, 0x61, 0x02, 0xBA, 0x5C, 0xBA, 0x65, 0xE1, 0xF2, 0xE1, 0xE2,
    0xE9, 0x63, 0x80, 0x06, 0x29, 0xE6, 0xE9, 0xEE, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63,
    0x80, 0xFE, 0x94, 0x65, 0x02, 0xBA, 0x79, 0xBA, 0x86, 0xE4, 0xE9, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1,
    0xE2, 0xE9, 0x63, 0x80, 0xFE, 0x98, 0xE5, 0xED, 0x69, 0x02, 0xBA, 0x8E, 0xBA, 0x9D, 0xEE, 0xE9,
    0xF4, 0xE9, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFC, 0xA4, 0xF3, 0xEF, 0xEC,
    0xE1, 0xF4, 0xE5, 0xE4, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFC, 0x0E, 0xEE, 0xEF, 0xEF,
    0xEE, 0xE6, 0xE9, 0xEE, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFC, 0x73, 0xEB,
    0xE1, 0xF4, 0xE1, 0xEB, 0xE1, 0xEE, 0x61, 0x81, 0x30, 0xC6, 0xBA, 0xCC, 0xE8, 0xE1, 0xEC, 0xE6,
    0xF7, 0xE9, 0xE4, 0xF4, 0x68, 0x80, 0xFF, 0x83, 0x6C, 0x02, 0xBA, 0xDE, 0xBA, 0xF1, 0xE5, 0xF0,
    0xE8, 0xEF, 0xEE, 0x65, 0x81, 0x21, 0x21, 0xBA, 0xE9, 0xE2, 0xEC, 0xE1, 0xE3, 0x6B, 0x80, 0x26,
    0x0E, 0xE9, 0xF3, 0xE8, 0x61, 0x02, 0xBA, 0xFA, 0xBB, 0x09, 0xE7, 0xE5, 0xE4, 0xEF, 0xEC, 0xE1,
    0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xA0, 0xF1, 0xE5, 0xF4, 0xE1, 0xEE, 0xE1, 0xE8,
    0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xA9, 0x6E, 0x04, 0xBB, 0x22, 0xBB, 0x2B, 0xBB, 0x3E,
    0xBB, 0x53, 0xE3, 0xE9, 0xF2, 0xE3, 0xEC, 0x65, 0x80, 0x24, 0x69, 0xE9, 0xE4, 0xE5, 0xEF, 0xE7,
    0xF2, 0xE1, 0xF0, 0xE8, 0xE9, 0xE3, 0xF0, 0xE1, 0xF2, 0xE5, 0x6E, 0x80, 0x32, 0x29, 0x70, 0x02,
    0xBB, 0x44, 0xBB, 0x4B, 0xE1, 0xF2, 0xE5, 0x6E, 0x80, 0x24, 0x7D, 0xE5, 0xF2, 0xE9, 0xEF, 0x64,
    0x80, 0x24, 0x91, 0xF2, 0xEF, 0xED, 0xE1, 0x6E, 0x80, 0x21, 0x79, 0xF3, 0x68, 0x80, 0x02, 0xA7,
    0x74, 0x83, 0x05, 0xD8, 0xBB, 0x6A, 0xBB, 0x7E, 0xBB, 0x87, 0xE4, 0xE1, 0xE7, 0xE5, 0xF3, 0x68,
    0x81, 0xFB, 0x38, 0xBB, 0x75, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0xFB, 0x38, 0xE8, 0xE5,
    0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xD8, 0xF3, 0xE5, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9,
    0x63, 0x80, 0x04, 0xB5, 0xF6, 0xE9, 0x72, 0x02, 0xBB, 0x9C, 0xBB, 0xA5, 0xE8, 0xE5, 0xE2, 0xF2,
    0xE5, 0x77, 0x80, 0x05, 0x9B, 0xEC, 0xE5, 0xE6, 0xF4, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80,
    0x05, 0x9B, 0x68, 0x06, 0xBB, 0xC0, 0xBC, 0x58, 0xBC, 0xD2, 0xBD, 0x56, 0xBD, 0xF9, 0xBF, 0x32,
    0x61, 0x05, 0xBB, 0xCC, 0xBB, 0xD6, 0xBB, 0xDD, 0xBB, 0xF6, 0xBC, 0x13, 0xE2, 0xE5, 0xEE, 0xE7,
    0xE1, 0xEC, 0x69, 0x80, 0x09, 0xA5, 0xE4, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x25, 0xE7, 0x75, 0x02,
    0xBB, 0xE4, 0xBB, 0xED, 0xEA, 0xE1, 0xF2, 0xE1, 0xF4, 0x69, 0x80, 0x0A, 0xA5, 0xF2, 0xED, 0xF5,
    0xEB, 0xE8, 0x69, 0x80, 0x0A, 0x25, 0x6C, 0x02, 0xBB, 0xFC, 0xBC, 0x05, 0xE1, 0xF2, 0xE1, 0xE2,
    0xE9, 0x63, 0x80, 0x06, 0x30, 0xE6, 0xE9, 0xEE, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63,
    0x80, 0xFE, 0xAC, 0xEE, 0xF4, 0xE8, 0xE1, 0xEB, 0xE8, 0xE1, 0x74, 0x03, 0xBC, 0x22, 0xBC, 0x41,
    0xBC, 0x48, 0xEC, 0xEF, 0x77, 0x02, 0xBC, 0x2A, 0xBC, 0x35, 0xEC, 0xE5, 0xE6, 0xF4, 0xF4, 0xE8,
    0xE1, 0x69, 0x80, 0xF8, 0x98, 0xF2, 0xE9, 0xE7, 0xE8, 0xF4, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0xF8,
    0x97, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x4C, 0xF5, 0xF0, 0xF0, 0xE5, 0xF2, 0xEC, 0xE5, 0xE6,
    0xF4, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0xF8, 0x96, 0x65, 0x03, 0xBC, 0x60, 0xBC, 0xA0, 0xBC, 0xB7,
    0x68, 0x04, 0xBC, 0x6A, 0xBC, 0x73, 0xBC, 0x81, 0xBC, 0x91, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63,
    0x80, 0x06, 0x2B, 0xE6, 0xE9, 0xEE, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE,
    0x9A, 0xE9, 0xEE, 0xE9, 0xF4, 0xE9, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE,
    0x9B, 0xED, 0xE5, 0xE4, 0xE9, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE, 0x9C,
    0xF2, 0x65, 0x02, 0xBC, 0xA7, 0xBC, 0xB0, 0xE5, 0xF8, 0xE9, 0xF3, 0xF4, 0x73, 0x80, 0x22, 0x03,
    0xE6, 0xEF, 0xF2, 0x65, 0x80, 0x22, 0x34, 0xF4, 0x61, 0x82, 0x03, 0xB8, 0xBC, 0xC0, 0xBC, 0xC4,
    0x31, 0x80, 0x03, 0xD1, 0xF3, 0xF9, 0xED, 0xE2, 0xEF, 0xEC, 0xE7, 0xF2, 0xE5, 0xE5, 0x6B, 0x80,
    0x03, 0xD1, 0x69, 0x02, 0xBC, 0xD8, 0xBD, 0x2E, 0xE5, 0xF5, 0xF4, 0x68, 0x04, 0xBC, 0xE5, 0xBD,
    0x08, 0xBD, 0x17, 0xBD, 0x20, 0x61, 0x02, 0xBC, 0xEB, 0xBC, 0xFA, 0xE3, 0xE9, 0xF2, 0xE3, 0xEC,
    0xE5, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x32, 0x79, 0xF0, 0xE1, 0xF2, 0xE5, 0xEE, 0xEB,
    0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x32, 0x19, 0xE3, 0xE9, 0xF2, 0xE3, 0xEC, 0xE5, 0xEB, 0xEF,
    0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x32, 0x6B, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31, 0x4C,
    0xF0, 0xE1, 0xF2, 0xE5, 0xEE, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x32, 0x0B, 0xF2, 0xF4,
    0xE5, 0xE5, 0x6E, 0x02, 0xBD, 0x38, 0xBD, 0x41, 0xE3, 0xE9, 0xF2, 0xE3, 0xEC, 0x65, 0x80, 0x24,
    0x6C, 0x70, 0x02, 0xBD, 0x47, 0xBD, 0x4E, 0xE1, 0xF2, 0xE5, 0x6E, 0x80, 0x24, 0x80, 0xE5, 0xF2,
    0xE9, 0xEF, 0x64, 0x80, 0x24, 0x94, 0x6F, 0x06, 0xBD, 0x64, 0xBD, 0x75, 0xBD, 0x7A, 0xBD, 0x88,
    0xBD, 0x8D, 0xBD, 0xC2, 0xEE, 0xE1, 0xEE, 0xE7, 0xED, 0xEF, 0xEE, 0xF4, 0xE8, 0xEF, 0xF4, 0xE8,
    0xE1, 0x69, 0x80, 0x0E, 0x11, 0xEF, 0x6B, 0x80, 0x01, 0xAD, 0xF0, 0xE8, 0xF5, 0xF4, 0xE8, 0xE1,
    0xEF, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x12, 0xF2, 0x6E, 0x80, 0x00, 0xFE, 0xF4, 0x68, 0x03,
    0xBD, 0x96, 0xBD, 0xAE, 0xBD, 0xB8, 0x61, 0x02, 0xBD, 0x9C, 0xBD, 0xA6, 0xE8, 0xE1, 0xEE, 0xF4,
    0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x17, 0xEE, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x10, 0xEF, 0xEE,
    0xE7, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x18, 0xF5, 0xEE, 0xE7, 0xF4, 0xE8, 0xE1, 0x69, 0x80,
    0x0E, 0x16, 0xF5, 0xF3, 0xE1, 0xEE, 0x64, 0x02, 0xBD, 0xCC, 0xBD, 0xD7, 0xE3, 0xF9, 0xF2, 0xE9,
    0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x82, 0xF3, 0xF3, 0xE5, 0xF0, 0xE1, 0xF2, 0xE1, 0xF4, 0xEF,
    0x72, 0x02, 0xBD, 0xE6, 0xBD, 0xEF, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0x06, 0x6C, 0xF0,
    0xE5, 0xF2, 0xF3, 0xE9, 0xE1, 0x6E, 0x80, 0x06, 0x6C, 0xF2, 0xE5, 0x65, 0x90, 0x00, 0x33, 0xBE,
    0x1F, 0xBE, 0x28, 0xBE, 0x32, 0xBE, 0x50, 0xBE, 0x57, 0xBE, 0x61, 0xBE, 0x7A, 0xBE, 0x95, 0xBE,
    0xB7, 0xBE, 0xC3, 0xBE, 0xD6, 0xBE, 0xE1, 0xBF, 0x02, 0xBF, 0x18, 0xBF, 0x20, 0xBF, 0x2B, 0xE1,
    0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0x06, 0x63, 0xE2, 0xE5, 0xEE, 0xE7, 0xE1, 0xEC, 0x69, 0x80,
    0x09, 0xE9, 0xE3, 0xE9, 0xF2, 0xE3, 0xEC, 0x65, 0x81, 0x24, 0x62, 0xBE, 0x3D, 0xE9, 0xEE, 0xF6,
    0xE5, 0xF2, 0xF3, 0xE5, 0xF3, 0xE1, 0xEE, 0xF3, 0xF3, 0xE5, 0xF2, 0xE9, 0x66, 0x80, 0x27, 0x8C,
    0xE4, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x69, 0xE5, 0xE9, 0xE7, 0xE8, 0xF4, 0xE8, 0x73, 0x80, 0x21,
    0x5C, 0xE7, 0x75, 0x02, 0xBE, 0x68, 0xBE, 0x71, 0xEA, 0xE1, 0xF2, 0xE1, 0xF4, 0x69, 0x80, 0x0A,
    0xE9, 0xF2, 0xED, 0xF5, 0xEB, 0xE8, 0x69, 0x80, 0x0A, 0x69, 0xE8, 0x61, 0x02, 0xBE, 0x81, 0xBE,
    0x8C, 0xE3, 0xEB, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0x06, 0x63, 0xEE, 0xE7, 0xFA, 0xE8,
    0xEF, 0x75, 0x80, 0x30, 0x23, 0x69, 0x02, 0xBE, 0x9B, 0xBE, 0xAD, 0xE4, 0xE5, 0xEF, 0xE7, 0xF2,
    0xE1, 0xF0, 0xE8, 0xE9, 0xE3, 0xF0, 0xE1, 0xF2, 0xE5, 0x6E, 0x80, 0x32, 0x22, 0xEE, 0xE6, 0xE5,
    0xF2, 0xE9, 0xEF, 0x72, 0x80, 0x20, 0x83, 0xED, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65,
    0x80, 0xFF, 0x13, 0xEE, 0xF5, 0xED, 0xE5, 0xF2, 0xE1, 0xF4, 0xEF, 0xF2, 0xE2, 0xE5, 0xEE, 0xE7,
    0xE1, 0xEC, 0x69, 0x80, 0x09, 0xF6, 0xEF, 0xEC, 0xE4, 0xF3, 0xF4, 0xF9, 0xEC, 0x65, 0x80, 0xF7,
    0x33, 0x70, 0x02, 0xBE, 0xE7, 0xBE, 0xEE, 0xE1, 0xF2, 0xE5, 0x6E, 0x80, 0x24, 0x76, 0xE5, 0x72,
    0x02, 0xBE, 0xF5, 0xBE, 0xFB, 0xE9, 0xEF, 0x64, 0x80, 0x24, 0x8A, 0xF3, 0xE9, 0xE1, 0x6E, 0x80,
    0x06, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0xF4, 0xE5, 0xF2, 0x73, 0x81, 0x00, 0xBE, 0xBF, 0x0F, 0xE5,
    0xED, 0xE4, 0xE1, 0xF3, 0x68, 0x80, 0xF6, 0xDE, 0xF2, 0xEF, 0xED, 0xE1, 0x6E, 0x80, 0x21, 0x72,
    0xF3, 0xF5, 0xF0, 0xE5, 0xF2, 0xE9, 0xEF, 0x72, 0x80, 0x00, 0xB3, 0xF4, 0xE8, 0xE1, 0x69, 0x80,
    0x0E, 0x53, 0xFA, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0x94, 0x69, 0x07, 0xBF, 0x4C,
    0xBF, 0x57, 0xBF, 0xCA, 0xC0, 0x2C, 0xC0, 0x38, 0xC0, 0x69, 0xC0, 0x7A, 0xE8, 0xE9, 0xF2, 0xE1,
    0xE7, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0x61, 0x6B, 0x02, 0xBF, 0x5D, 0xBF, 0x75, 0xE1, 0xF4, 0xE1,
    0xEB, 0xE1, 0xEE, 0x61, 0x81, 0x30, 0xC1, 0xBF, 0x69, 0xE8, 0xE1, 0xEC, 0xE6, 0xF7, 0xE9, 0xE4,
    0xF4, 0x68, 0x80, 0xFF, 0x81, 0xE5, 0xF5, 0x74, 0x04, 0xBF, 0x81, 0xBF, 0xA4, 0xBF, 0xB3, 0xBF,
    0xBC, 0x61, 0x02, 0xBF, 0x87, 0xBF, 0x96, 0xE3, 0xE9, 0xF2, 0xE3, 0xEC, 0xE5, 0xEB, 0xEF, 0xF2,
    0xE5, 0xE1, 0x6E, 0x80, 0x32, 0x70, 0xF0, 0xE1, 0xF2, 0xE5, 0xEE, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1,
    0x6E, 0x80, 0x32, 0x10, 0xE3, 0xE9, 0xF2, 0xE3, 0xEC, 0xE5, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E,
    0x80, 0x32, 0x62, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31, 0x37, 0xF0, 0xE1, 0xF2, 0xE5,
    0xEE, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x32, 0x02, 0xEC, 0xE4, 0x65, 0x85, 0x02, 0xDC,
    0xBF, 0xDA, 0xBF, 0xE5, 0xBF, 0xF6, 0xC0, 0x02, 0xC0, 0x1E, 0xE2, 0xE5, 0xEC, 0xEF, 0xF7, 0xE3,
    0xED, 0x62, 0x80, 0x03, 0x30, 0x63, 0x02, 0xBF, 0xEB, 0xBF, 0xF0, 0xED, 0x62, 0x80, 0x03, 0x03,
    0xEF, 0xED, 0x62, 0x80, 0x03, 0x03, 0xE4, 0xEF, 0xF5, 0xE2, 0xEC, 0xE5, 0xE3, 0xED, 0x62, 0x80,
    0x03, 0x60, 0x6F, 0x02, 0xC0, 0x08, 0xC0, 0x12, 0xF0, 0xE5, 0xF2, 0xE1, 0xF4, 0xEF, 0x72, 0x80,
    0x22, 0x3C, 0xF6, 0xE5, 0xF2, 0xEC, 0xE1, 0xF9, 0xE3, 0xED, 0x62, 0x80, 0x03, 0x34, 0xF6, 0xE5,
    0xF2, 0xF4, 0xE9, 0xE3, 0xE1, 0xEC, 0xE3, 0xED, 0x62, 0x80, 0x03, 0x3E, 0xED, 0xE5, 0xF3, 0xE3,
    0xE9, 0xF2, 0xE3, 0xEC, 0x65, 0x80, 0x22, 0x97, 0x70, 0x02, 0xC0, 0x3E, 0xC0, 0x5C, 0xE5, 0xE8,
    0x61, 0x02, 0xC0, 0x46, 0xC0, 0x4F, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0x96, 0xEC,
    0xE5, 0xE6, 0xF4, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0x96, 0xF0, 0xE9, 0xE7, 0xF5,
    0xF2, 0xED, 0xF5, 0xEB, 0xE8, 0x69, 0x80, 0x0A, 0x70, 0xF4, 0xEC, 0xEF, 0xE3, 0xF9, 0xF2, 0xE9,
    0xEC, 0xEC, 0xE9, 0xE3, 0xE3, 0xED, 0x62, 0x80, 0x04, 0x83, 0xF7, 0xEE, 0xE1, 0xF2, 0xED, 0xE5,
    0xEE, 0xE9, 0xE1, 0x6E, 0x80, 0x05, 0x7F, 0xEC, 0xE9, 0xEE, 0xE5, 0xE2, 0xE5, 0xEC, 0xEF, 0x77,
    0x80, 0x1E, 0x6F, 0xED, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80, 0xFF, 0x54, 0x6F,
    0x07, 0xC0, 0xAF, 0xC0, 0xBA, 0xC0, 0xC5, 0xC0, 0xDE, 0xC1, 0x56, 0xC1, 0x62, 0xC1, 0xB6, 0xE1,
    0xF2, 0xED, 0xE5, 0xEE, 0xE9, 0xE1, 0x6E, 0x80, 0x05, 0x69, 0xE8, 0xE9, 0xF2, 0xE1, 0xE7, 0xE1,
    0xEE, 0x61, 0x80, 0x30, 0x68, 0xEB, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1, 0xEE, 0x61, 0x81, 0x30, 0xC8,
    0xC0, 0xD2, 0xE8, 0xE1, 0xEC, 0xE6, 0xF7, 0xE9, 0xE4, 0xF4, 0x68, 0x80, 0xFF, 0x84, 0x6E, 0x03,
    0xC0, 0xE6, 0xC1, 0x48, 0xC1, 0x4D, 0x65, 0x04, 0xC0, 0xF0, 0xC1, 0x35, 0xC1, 0x3C, 0xC1, 0x42,
    0xE2, 0xE1, 0x72, 0x04, 0xC0, 0xFC, 0xC1, 0x19, 0xC1, 0x23, 0xC1, 0x2C, 0xE5, 0xF8, 0xF4, 0xF2,
    0x61, 0x02, 0xC1, 0x06, 0xC1, 0x10, 0xE8, 0xE9, 0xE7, 0xE8, 0xED, 0xEF, 0x64, 0x80, 0x02, 0xE5,
    0xEC, 0xEF, 0xF7, 0xED, 0xEF, 0x64, 0x80, 0x02, 0xE9, 0xE8, 0xE9, 0xE7, 0xE8, 0xED, 0xEF, 0x64,
    0x80, 0x02, 0xE6, 0xEC, 0xEF, 0xF7, 0xED, 0xEF, 0x64, 0x80, 0x02, 0xE8, 0xED, 0xE9, 0xE4, 0xED,
    0xEF, 0x64, 0x80, 0x02, 0xE7, 0xE6, 0xE9, 0xF6, 0x65, 0x80, 0x01, 0xBD, 0xF3, 0xE9, 0x78, 0x80,
    0x01, 0x85, 0xF4, 0xF7, 0x6F, 0x80, 0x01, 0xA8, 0xEF, 0x73, 0x80, 0x03, 0x84, 0xF3, 0xF1, 0xF5,
    0xE1, 0xF2, 0x65, 0x80, 0x33, 0x27, 0xF0, 0xE1, 0xF4, 0xE1, 0xEB, 0xF4, 0xE8, 0xE1, 0x69, 0x80,
    0x0E, 0x0F, 0xF2, 0xF4, 0xEF, 0xE9, 0xF3, 0xE5, 0xF3, 0xE8, 0xE5, 0xEC, 0xEC, 0xE2, 0xF2, 0xE1,
    0xE3, 0xEB, 0xE5, 0x74, 0x02, 0xC1, 0x79, 0xC1, 0x97, 0xEC, 0xE5, 0xE6, 0x74, 0x82, 0x30, 0x14,
    0xC1, 0x84, 0xC1, 0x8C, 0xF3, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xFE, 0x5D, 0xF6, 0xE5, 0xF2, 0xF4,
    0xE9, 0xE3, 0xE1, 0x6C, 0x80, 0xFE, 0x39, 0xF2, 0xE9, 0xE7, 0xE8, 0x74, 0x82, 0x30, 0x15, 0xC1,
    0xA3, 0xC1, 0xAB, 0xF3, 0xED, 0xE1, 0xEC, 0x6C, 0x80, 0xFE, 0x5E, 0xF6, 0xE5, 0xF2, 0xF4, 0xE9,
    0xE3, 0xE1, 0x6C, 0x80, 0xFE, 0x3A, 0xF4, 0xE1, 0xEF, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x15,
    0xF0, 0x61, 0x02, 0xC1, 0xC7, 0xC1, 0xD3, 0xEC, 0xE1, 0xF4, 0xE1, 0xEC, 0xE8, 0xEF, 0xEF, 0x6B,
    0x80, 0x01, 0xAB, 0xF2, 0xE5, 0x6E, 0x80, 0x24, 0xAF, 0x72, 0x03, 0xC1, 0xE1, 0xC2, 0x00, 0xC2,
    0x0F, 0xE1, 0xE4, 0xE5, 0xED, 0xE1, 0xF2, 0x6B, 0x81, 0x21, 0x22, 0xC1, 0xED, 0x73, 0x02, 0xC1,
    0xF3, 0xC1, 0xF9, 0xE1, 0xEE, 0x73, 0x80, 0xF8, 0xEA, 0xE5, 0xF2, 0xE9, 0x66, 0x80, 0xF6, 0xDB,
    0xE5, 0xF4, 0xF2, 0xEF, 0xE6, 0xEC, 0xE5, 0xF8, 0xE8, 0xEF, 0xEF, 0x6B, 0x80, 0x02, 0x88, 0xE9,
    0xE1, 0x67, 0x04, 0xC2, 0x1B, 0xC2, 0x20, 0xC2, 0x25, 0xC2, 0x2A, 0xE4, 0x6E, 0x80, 0x25, 0xBC,
    0xEC, 0x66, 0x80, 0x25, 0xC4, 0xF2, 0x74, 0x80, 0x25, 0xBA, 0xF5, 0x70, 0x80, 0x25, 0xB2, 0x73,
    0x84, 0x02, 0xA6, 0xC2, 0x3B, 0xC2, 0x62, 0xC2, 0xCC, 0xC2, 0xD9, 0xE1, 0xE4, 0x69, 0x82, 0x05,
    0xE6, 0xC2, 0x45, 0xC2, 0x59, 0xE4, 0xE1, 0xE7, 0xE5, 0xF3, 0x68, 0x81, 0xFB, 0x46, 0xC2, 0x50,
    0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0xFB, 0x46, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80,
    0x05, 0xE6, 0x65, 0x02, 0xC2, 0x68, 0xC2, 0x73, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63,
    0x80, 0x04, 0x46, 0xF2, 0x65, 0x86, 0x05, 0xB5, 0xC2, 0x84, 0xC2, 0x92, 0xC2, 0x97, 0xC2, 0xA0,
    0xC2, 0xAF, 0xC2, 0xBF, 0x31, 0x02, 0xC2, 0x8A, 0xC2, 0x8E, 0x32, 0x80, 0x05, 0xB5, 0x65, 0x80,
    0x05, 0xB5, 0xB2, 0x62, 0x80, 0x05, 0xB5, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xB5,
    0xEE, 0xE1, 0xF2, 0xF2, 0xEF, 0xF7, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xB5, 0xF1,
    0xF5, 0xE1, 0xF2, 0xF4, 0xE5, 0xF2, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xB5, 0xF7,
    0xE9, 0xE4, 0xE5, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xB5, 0xE8, 0xE5, 0xE3, 0xF9,
    0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x5B, 0xF5, 0xF0, 0xE5, 0xF2, 0xE9, 0xEF, 0x72,
    0x80, 0xF6, 0xF3, 0x74, 0x04, 0xC2, 0xED, 0xC3, 0x1F, 0xC3, 0x60, 0xC3, 0x93, 0x61, 0x03, 0xC2,
    0xF5, 0xC2, 0xFF, 0xC3, 0x06, 0xE2, 0xE5, 0xEE, 0xE7, 0xE1, 0xEC, 0x69, 0x80, 0x09, 0x9F, 0xE4,
    0xE5, 0xF6, 0x61, 0x80, 0x09, 0x1F, 0xE7, 0x75, 0x02, 0xC3, 0x0D, 0xC3, 0x16, 0xEA, 0xE1, 0xF2,
    0xE1, 0xF4, 0x69, 0x80, 0x0A, 0x9F, 0xF2, 0xED, 0xF5, 0xEB, 0xE8, 0x69, 0x80, 0x0A, 0x1F, 0xE5,
    0x68, 0x04, 0xC3, 0x2A, 0xC3, 0x33, 0xC3, 0x41, 0xC3, 0x51, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63,
    0x80, 0x06, 0x79, 0xE6, 0xE9, 0xEE, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFB,
    0x67, 0xE9, 0xEE, 0xE9, 0xF4, 0xE9, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFB,
    0x68, 0xED, 0xE5, 0xE4, 0xE9, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFB, 0x69,
    0xE8, 0x61, 0x03, 0xC3, 0x69, 0xC3, 0x73, 0xC3, 0x7A, 0xE2, 0xE5, 0xEE, 0xE7, 0xE1, 0xEC, 0x69,
    0x80, 0x09, 0xA0, 0xE4, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x20, 0xE7, 0x75, 0x02, 0xC3, 0x81, 0xC3,
    0x8A, 0xEA, 0xE1, 0xF2, 0xE1, 0xF4, 0x69, 0x80, 0x0A, 0xA0, 0xF2, 0xED, 0xF5, 0xEB, 0xE8, 0x69,
    0x80, 0x0A, 0x20, 0xF5, 0xF2, 0xEE, 0xE5, 0x64, 0x80, 0x02, 0x87, 0x75, 0x03, 0xC3, 0xA3, 0xC3,
    0xAE, 0xC3, 0xC7, 0xE8, 0xE9, 0xF2, 0xE1, 0xE7, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0x64, 0xEB, 0xE1,
    0xF4, 0xE1, 0xEB, 0xE1, 0xEE, 0x61, 0x81, 0x30, 0xC4, 0xC3, 0xBB, 0xE8, 0xE1, 0xEC, 0xE6, 0xF7,
    0xE9, 0xE4, 0xF4, 0x68, 0x80, 0xFF, 0x82, 0xF3, 0xED, 0xE1, 0xEC, 0x6C, 0x02, 0xC3, 0xD1, 0xC3,
    0xDC, 0xE8, 0xE9, 0xF2, 0xE1, 0xE7, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0x63, 0xEB, 0xE1, 0xF4, 0xE1,
    0xEB, 0xE1, 0xEE, 0x61, 0x81, 0x30, 0xC3, 0xC3, 0xE9, 0xE8, 0xE1, 0xEC, 0xE6, 0xF7, 0xE9, 0xE4,
    0xF4, 0x68, 0x80, 0xFF, 0x6F, 0x77, 0x02, 0xC3, 0xFB, 0xC4, 0x64, 0x65, 0x02, 0xC4, 0x01, 0xC4,
    0x31, 0xEC, 0xF6, 0x65, 0x03, 0xC4, 0x0B, 0xC4, 0x14, 0xC4, 0x29, 0xE3, 0xE9, 0xF2, 0xE3, 0xEC,
    0x65, 0x80, 0x24, 0x6B, 0x70, 0x02, 0xC4, 0x1A, 0xC4, 0x21, 0xE1, 0xF2, 0xE5, 0x6E, 0x80, 0x24,
    0x7F, 0xE5, 0xF2, 0xE9, 0xEF, 0x64, 0x80, 0x24, 0x93, 0xF2, 0xEF, 0xED, 0xE1, 0x6E, 0x80, 0x21,
    0x7B, 0xEE, 0xF4, 0x79, 0x03, 0xC4, 0x3B, 0xC4, 0x44, 0xC4, 0x4F, 0xE3, 0xE9, 0xF2, 0xE3, 0xEC,
    0x65, 0x80, 0x24, 0x73, 0xE8, 0xE1, 0xEE, 0xE7, 0xFA, 0xE8, 0xEF, 0x75, 0x80, 0x30, 0x39, 0x70,
    0x02, 0xC4, 0x55, 0xC4, 0x5C, 0xE1, 0xF2, 0xE5, 0x6E, 0x80, 0x24, 0x87, 0xE5, 0xF2, 0xE9, 0xEF,
    0x64, 0x80, 0x24, 0x9B, 0x6F, 0x8E, 0x00, 0x32, 0xC4, 0x84, 0xC4, 0x8D, 0xC4, 0x97, 0xC4, 0xB5,
    0xC4, 0xE9, 0xC5, 0x02, 0xC5, 0x1D, 0xC5, 0x3F, 0xC5, 0x4B, 0xC5, 0x5E, 0xC5, 0x69, 0xC5, 0x8A,
    0xC5, 0x92, 0xC5, 0xAA, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0x06, 0x62, 0xE2, 0xE5, 0xEE,
    0xE7, 0xE1, 0xEC, 0x69, 0x80, 0x09, 0xE8, 0xE3, 0xE9, 0xF2, 0xE3, 0xEC, 0x65, 0x81, 0x24, 0x61,
    0xC4, 0xA2, 0xE9, 0xEE, 0xF6, 0xE5, 0xF2, 0xF3, 0xE5, 0xF3, 0xE1, 0xEE, 0xF3, 0xF3, 0xE5, 0xF2,
    0xE9, 0x66, 0x80, 0x27, 0x8B, 0x64, 0x02, 0xC4, 0xBB, 0xC4, 0xC1, 0xE5, 0xF6, 0x61, 0x80, 0x09,
    0x68, 0xEF, 0x74, 0x02, 0xC4, 0xC8, 0xC4, 0xD3, 0xE5, 0xEE, 0xEC, 0xE5, 0xE1, 0xE4, 0xE5, 0x72,
    0x80, 0x20, 0x25, 0xEC, 0xE5, 0xE1, 0xE4, 0xE5, 0x72, 0x81, 0x20, 0x25, 0xC4, 0xDE, 0xF6, 0xE5,
    0xF2, 0xF4, 0xE9, 0xE3, 0xE1, 0x6C, 0x80, 0xFE, 0x30, 0xE7, 0x75, 0x02, 0xC4, 0xF0, 0xC4, 0xF9,
    0xEA, 0xE1, 0xF2, 0xE1, 0xF4, 0x69, 0x80, 0x0A, 0xE8, 0xF2, 0xED, 0xF5, 0xEB, 0xE8, 0x69, 0x80,
    0x0A, 0x68, 0xE8, 0x61, 0x02, 0xC5, 0x09, 0xC5, 0x14, 0xE3, 0xEB, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9,
    0x63, 0x80, 0x06, 0x62, 0xEE, 0xE7, 0xFA, 0xE8, 0xEF, 0x75, 0x80, 0x30, 0x22, 0x69, 0x02, 0xC5,
    0x23, 0xC5, 0x35, 0xE4, 0xE5, 0xEF, 0xE7, 0xF2, 0xE1, 0xF0, 0xE8, 0xE9, 0xE3, 0xF0, 0xE1, 0xF2,
    0xE5, 0x6E, 0x80, 0x32, 0x21, 0xEE, 0xE6, 0xE5, 0xF2, 0xE9, 0xEF, 0x72, 0x80, 0x20, 0x82, 0xED,
    0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80, 0xFF, 0x12, 0xEE, 0xF5, 0xED, 0xE5, 0xF2,
    0xE1, 0xF4, 0xEF, 0xF2, 0xE2, 0xE5, 0xEE, 0xE7, 0xE1, 0xEC, 0x69, 0x80, 0x09, 0xF5, 0xEF, 0xEC,
    0xE4, 0xF3, 0xF4, 0xF9, 0xEC, 0x65, 0x80, 0xF7, 0x32, 0x70, 0x02, 0xC5, 0x6F, 0xC5, 0x76, 0xE1,
    0xF2, 0xE5, 0x6E, 0x80, 0x24, 0x75, 0xE5, 0x72, 0x02, 0xC5, 0x7D, 0xC5, 0x83, 0xE9, 0xEF, 0x64,
    0x80, 0x24, 0x89, 0xF3, 0xE9, 0xE1, 0x6E, 0x80, 0x06, 0xF2, 0xF2, 0xEF, 0xED, 0xE1, 0x6E, 0x80,
    0x21, 0x71, 0x73, 0x02, 0xC5, 0x98, 0xC5, 0xA0, 0xF4, 0xF2, 0xEF, 0xEB, 0x65, 0x80, 0x01, 0xBB,
    0xF5, 0xF0, 0xE5, 0xF2, 0xE9, 0xEF, 0x72, 0x80, 0x00, 0xB2, 0xF4, 0x68, 0x02, 0xC5, 0xB1, 0xC5,
    0xB6, 0xE1, 0x69, 0x80, 0x0E, 0x52, 0xE9, 0xF2, 0xE4, 0x73, 0x80, 0x21, 0x54, 0x75, 0x91, 0x00,
    0x75, 0xC5, 0xE3, 0xC5, 0xEB, 0xC6, 0x14, 0xC6, 0x4D, 0xC6, 0xD7, 0xC6, 0xFC, 0xC7, 0x77, 0xC7,
    0x87, 0xC7, 0xBA, 0xC8, 0x00, 0xC8, 0x51, 0xC8, 0x5A, 0xC8, 0xD1, 0xC8, 0xE9, 0xC9, 0x55, 0xC9,
    0x71, 0xC9, 0xE3, 0xE1, 0xE3, 0xF5, 0xF4, 0x65, 0x80, 0x00, 0xFA, 0x62, 0x04, 0xC5, 0xF5, 0xC5,
    0xFA, 0xC6, 0x03, 0xC6, 0x0D, 0xE1, 0x72, 0x80, 0x02, 0x89, 0xE5, 0xEE, 0xE7, 0xE1, 0xEC, 0x69,
    0x80, 0x09, 0x89, 0xEF, 0xF0, 0xEF, 0xED, 0xEF, 0xE6, 0x6F, 0x80, 0x31, 0x28, 0xF2, 0xE5, 0xF6,
    0x65, 0x80, 0x01, 0x6D, 0x63, 0x03, 0xC6, 0x1C, 0xC6, 0x23, 0xC6, 0x43, 0xE1, 0xF2, 0xEF, 0x6E,
    0x80, 0x01, 0xD4, 0xE9, 0xF2, 0x63, 0x02, 0xC6, 0x2B, 0xC6, 0x30, 0xEC, 0x65, 0x80, 0x24, 0xE4,
    0xF5, 0xED, 0xE6, 0xEC, 0xE5, 0x78, 0x81, 0x00, 0xFB, 0xC6, 0x3B, 0xE2, 0xE5, 0xEC, 0xEF, 0x77,
    0x80, 0x1E, 0x77, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x43, 0x64, 0x05, 0xC6,
    0x59, 0xC6, 0x64, 0xC6, 0x7B, 0xC6, 0x81, 0xC6, 0xCD, 0xE1, 0xF4, 0xF4, 0xE1, 0xE4, 0xE5, 0xF6,
    0x61, 0x80, 0x09, 0x51, 0xE2, 0x6C, 0x02, 0xC6, 0x6B, 0xC6, 0x73, 0xE1, 0xE3, 0xF5, 0xF4, 0x65,
    0x80, 0x01, 0x71, 0xE7, 0xF2, 0xE1, 0xF6, 0x65, 0x80, 0x02, 0x15, 0xE5, 0xF6, 0x61, 0x80, 0x09,
    0x09, 0xE9, 0xE5, 0xF2, 0xE5, 0xF3, 0xE9, 0x73, 0x85, 0x00, 0xFC, 0xC6, 0x95, 0xC6, 0x9D, 0xC6,
    0xA5, 0xC6, 0xBC, 0xC6, 0xC4, 0xE1, 0xE3, 0xF5, 0xF4, 0x65, 0x80, 0x01, 0xD8, 0xE2, 0xE5, 0xEC,
    0xEF, 0x77, 0x80, 0x1E, 0x73, 0x63, 0x02, 0xC6, 0xAB, 0xC6, 0xB2, 0xE1, 0xF2, 0xEF, 0x6E, 0x80,
    0x01, 0xDA, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0xF1, 0xE7, 0xF2, 0xE1, 0xF6,
    0x65, 0x80, 0x01, 0xDC, 0xED, 0xE1, 0xE3, 0xF2, 0xEF, 0x6E, 0x80, 0x01, 0xD6, 0xEF, 0xF4, 0xE2,
    0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E, 0xE5, 0x67, 0x02, 0xC6, 0xDD, 0xC6, 0xE4, 0xF2, 0xE1, 0xF6,
    0x65, 0x80, 0x00, 0xF9, 0x75, 0x02, 0xC6, 0xEA, 0xC6, 0xF3, 0xEA, 0xE1, 0xF2, 0xE1, 0xF4, 0x69,
    0x80, 0x0A, 0x89, 0xF2, 0xED, 0xF5, 0xEB, 0xE8, 0x69, 0x80, 0x0A, 0x09, 0x68, 0x03, 0xC7, 0x04,
    0xC7, 0x0E, 0xC7, 0x5C, 0xE9, 0xF2, 0xE1, 0xE7, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0x46, 0x6F, 0x02,
    0xC7, 0x14, 0xC7, 0x1E, 0xEF, 0xEB, 0xE1, 0xE2, 0xEF, 0xF6, 0x65, 0x80, 0x1E, 0xE7, 0xF2, 0x6E,
    0x85, 0x01, 0xB0, 0xC7, 0x2D, 0xC7, 0x35, 0xC7, 0x40, 0xC7, 0x48, 0xC7, 0x54, 0xE1, 0xE3, 0xF5,
    0xF4, 0x65, 0x80, 0x1E, 0xE9, 0xE4, 0xEF, 0xF4, 0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E, 0xF1,
    0xE7, 0xF2, 0xE1, 0xF6, 0x65, 0x80, 0x1E, 0xEB, 0xE8, 0xEF, 0xEF, 0xEB, 0xE1, 0xE2, 0xEF, 0xF6,
    0x65, 0x80, 0x1E, 0xED, 0xF4, 0xE9, 0xEC, 0xE4, 0x65, 0x80, 0x1E, 0xEF, 0xF5, 0xEE, 0xE7, 0xE1,
    0xF2, 0xF5, 0xED, 0xEC, 0xE1, 0xF5, 0x74, 0x81, 0x01, 0x71, 0xC7, 0x6C, 0xE3, 0xF9, 0xF2, 0xE9,
    0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0xF3, 0xE9, 0xEE, 0xF6, 0xE5, 0xF2, 0xF4, 0xE5, 0xE4, 0xE2,
    0xF2, 0xE5, 0xF6, 0x65, 0x80, 0x02, 0x17, 0x6B, 0x03, 0xC7, 0x8F, 0xC7, 0xA7, 0xC7, 0xB2, 0xE1,
    0xF4, 0xE1, 0xEB, 0xE1, 0xEE, 0x61, 0x81, 0x30, 0xA6, 0xC7, 0x9B, 0xE8, 0xE1, 0xEC, 0xE6, 0xF7,
    0xE9, 0xE4, 0xF4, 0x68, 0x80, 0xFF, 0x73, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80,
    0x04, 0x79, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31, 0x5C, 0x6D, 0x02, 0xC7, 0xC0, 0xC7, 0xF5,
    0x61, 0x02, 0xC7, 0xC6, 0xC7, 0xE7, 0xE3, 0xF2, 0xEF, 0x6E, 0x82, 0x01, 0x6B, 0xC7, 0xD1, 0xC7,
    0xDC, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0xEF, 0xE4, 0xE9, 0xE5, 0xF2,
    0xE5, 0xF3, 0xE9, 0x73, 0x80, 0x1E, 0x7B, 0xF4, 0xF2, 0xE1, 0xE7, 0xF5, 0xF2, 0xED, 0xF5, 0xEB,
    0xE8, 0x69, 0x80, 0x0A, 0x41, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80, 0xFF, 0x55,
    0x6E, 0x02, 0xC8, 0x06, 0xC8, 0x3D, 0xE4, 0xE5, 0xF2, 0xF3, 0xE3, 0xEF, 0xF2, 0x65, 0x84, 0x00,
    0x5F, 0xC8, 0x19, 0xC8, 0x1F, 0xC8, 0x2B, 0xC8, 0x36, 0xE4, 0xE2, 0x6C, 0x80, 0x20, 0x17, 0xED,
    0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80, 0xFF, 0x3F, 0xF6, 0xE5, 0xF2, 0xF4, 0xE9,
    0xE3, 0xE1, 0x6C, 0x80, 0xFE, 0x33, 0xF7, 0xE1, 0xF6, 0x79, 0x80, 0xFE, 0x4F, 0x69, 0x02, 0xC8,
    0x43, 0xC8, 0x48, 0xEF, 0x6E, 0x80, 0x22, 0x2A, 0xF6, 0xE5, 0xF2, 0xF3, 0xE1, 0x6C, 0x80, 0x22,
    0x00, 0xEF, 0xE7, 0xEF, 0xEE, 0xE5, 0x6B, 0x80, 0x01, 0x73, 0x70, 0x05, 0xC8, 0x66, 0xC8, 0x6D,
    0xC8, 0x75, 0xC8, 0x84, 0xC8, 0xB7, 0xE1, 0xF2, 0xE5, 0x6E, 0x80, 0x24, 0xB0, 0xE2, 0xEC, 0xEF,
    0xE3, 0x6B, 0x80, 0x25, 0x80, 0xF0, 0xE5, 0xF2, 0xE4, 0xEF, 0xF4, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5,
    0x77, 0x80, 0x05, 0xC4, 0xF3, 0xE9, 0xEC, 0xEF, 0x6E, 0x83, 0x03, 0xC5, 0xC8, 0x92, 0xC8, 0xA7,
    0xC8, 0xAF, 0xE4, 0xE9, 0xE5, 0xF2, 0xE5, 0xF3, 0xE9, 0x73, 0x81, 0x03, 0xCB, 0xC8, 0x9F, 0xF4,
    0xEF, 0xEE, 0xEF, 0x73, 0x80, 0x03, 0xB0, 0xEC, 0xE1, 0xF4, 0xE9, 0x6E, 0x80, 0x02, 0x8A, 0xF4,
    0xEF, 0xEE, 0xEF, 0x73, 0x80, 0x03, 0xCD, 0xF4, 0xE1, 0xE3, 0x6B, 0x02, 0xC8, 0xC0, 0xC8, 0xCB,
    0xE2, 0xE5, 0xEC, 0xEF, 0xF7, 0xE3, 0xED, 0x62, 0x80, 0x03, 0x1D, 0xED, 0xEF, 0x64, 0x80, 0x02,
    0xD4, 0x72, 0x02, 0xC8, 0xD7, 0xC8, 0xE3, 0xE1, 0xE7, 0xF5, 0xF2, 0xED, 0xF5, 0xEB, 0xE8, 0x69,
    0x80, 0x0A, 0x73, 0xE9, 0xEE, 0x67, 0x80, 0x01, 0x6F, 0x73, 0x03, 0xC8, 0xF1, 0xC9, 0x00, 0xC9,
    0x2D, 0xE8, 0xEF, 0xF2, 0xF4, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x5E,
    0xED, 0xE1, 0xEC, 0x6C, 0x02, 0xC9, 0x09, 0xC9, 0x14, 0xE8, 0xE9, 0xF2, 0xE1, 0xE7, 0xE1, 0xEE,
    0x61, 0x80, 0x30, 0x45, 0xEB, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1, 0xEE, 0x61, 0x81, 0x30, 0xA5, 0xC9,
    0x21, 0xE8, 0xE1, 0xEC, 0xE6, 0xF7, 0xE9, 0xE4, 0xF4, 0x68, 0x80, 0xFF, 0x69, 0xF4, 0xF2, 0xE1,
    0xE9, 0xE7, 0xE8, 0x74, 0x02, 0xC9, 0x39, 0xC9, 0x44, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9,
    0x63, 0x80, 0x04, 0xAF, 0xF3, 0xF4, 0xF2, 0xEF, 0xEB, 0xE5, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC,
    0xE9, 0x63, 0x80, 0x04, 0xB1, 0xF4, 0xE9, 0xEC, 0xE4, 0x65, 0x82, 0x01, 0x69, 0xC9, 0x61, 0xC9,
    0x69, 0xE1, 0xE3, 0xF5, 0xF4, 0x65, 0x80, 0x1E, 0x79, 0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E,
    0x75, 0x75, 0x05, 0xC9, 0x7D, 0xC9, 0x87, 0xC9, 0x8E, 0xC9, 0xA7, 0xC9, 0xB7, 0xE2, 0xE5, 0xEE,
    0xE7, 0xE1, 0xEC, 0x69, 0x80, 0x09, 0x8A, 0xE4, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x0A, 0xE7, 0x75,
    0x02, 0xC9, 0x95, 0xC9, 0x9E, 0xEA, 0xE1, 0xF2, 0xE1, 0xF4, 0x69, 0x80, 0x0A, 0x8A, 0xF2, 0xED,
    0xF5, 0xEB, 0xE8, 0x69, 0x80, 0x0A, 0x0A, 0xED, 0xE1, 0xF4, 0xF2, 0xE1, 0xE7, 0xF5, 0xF2, 0xED,
    0xF5, 0xEB, 0xE8, 0x69, 0x80, 0x0A, 0x42, 0xF6, 0xEF, 0xF7, 0xE5, 0xEC, 0xF3, 0xE9, 0xE7, 0x6E,
    0x03, 0xC9, 0xC7, 0xC9, 0xD1, 0xC9, 0xD8, 0xE2, 0xE5, 0xEE, 0xE7, 0xE1, 0xEC, 0x69, 0x80, 0x09,
    0xC2, 0xE4, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x42, 0xE7, 0xF5, 0xEA, 0xE1, 0xF2, 0xE1, 0xF4, 0x69,
    0x80, 0x0A, 0xC2, 0xF6, 0xEF, 0xF7, 0xE5, 0xEC, 0xF3, 0xE9, 0xE7, 0x6E, 0x03, 0xC9, 0xF3, 0xC9,
    0xFD, 0xCA, 0x04, 0xE2, 0xE5, 0xEE, 0xE7, 0xE1, 0xEC, 0x69, 0x80, 0x09, 0xC1, 0xE4, 0xE5, 0xF6,
    0x61, 0x80, 0x09, 0x41, 0xE7, 0xF5, 0xEA, 0xE1, 0xF2, 0xE1, 0xF4, 0x69, 0x80, 0x0A, 0xC1, 0x76,
    0x8B, 0x00, 0x76, 0xCA, 0x29, 0xCA, 0xBD, 0xCA, 0xC6, 0xCA, 0xD1, 0xCB, 0x8A, 0xCB, 0x91, 0xCB,
    0xF3, 0xCB, 0xFF, 0xCC, 0x63, 0xCC, 0x6B, 0xCC, 0x80, 0x61, 0x04, 0xCA, 0x33, 0xCA, 0x3A, 0xCA,
    0x53, 0xCA, 0x5E, 0xE4, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x35, 0xE7, 0x75, 0x02, 0xCA, 0x41, 0xCA,
    0x4A, 0xEA, 0xE1, 0xF2, 0xE1, 0xF4, 0x69, 0x80, 0x0A, 0xB5, 0xF2, 0xED, 0xF5, 0xEB, 0xE8, 0x69,
    0x80, 0x0A, 0x35, 0xEB, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0xF7, 0x76, 0x84,
    0x05, 0xD5, 0xCA, 0x6A, 0xCA, 0x85, 0xCA, 0xA5, 0xCA, 0xB1, 0xE4, 0xE1, 0xE7, 0xE5, 0xF3, 0x68,
    0x82, 0xFB, 0x35, 0xCA, 0x77, 0xCA, 0x7C, 0xB6, 0x35, 0x80, 0xFB, 0x35, 0xE8, 0xE5, 0xE2, 0xF2,
    0xE5, 0x77, 0x80, 0xFB, 0x35, 0x68, 0x02, 0xCA, 0x8B, 0xCA, 0x93, 0xE5, 0xE2, 0xF2, 0xE5, 0x77,
    0x80, 0x05, 0xD5, 0xEF, 0xEC, 0xE1, 0x6D, 0x81, 0xFB, 0x4B, 0xCA, 0x9C, 0xE8, 0xE5, 0xE2, 0xF2,
    0xE5, 0x77, 0x80, 0xFB, 0x4B, 0xF6, 0xE1, 0xF6, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05,
    0xF0, 0xF9, 0xEF, 0xE4, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xF1, 0xE3, 0xE9, 0xF2,
    0xE3, 0xEC, 0x65, 0x80, 0x24, 0xE5, 0xE4, 0xEF, 0xF4, 0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E,
    0x7F, 0x65, 0x06, 0xCA, 0xDF, 0xCA, 0xEA, 0xCB, 0x2A, 0xCB, 0x35, 0xCB, 0x3B, 0xCB, 0x7E, 0xE3,
    0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x32, 0x68, 0x04, 0xCA, 0xF4, 0xCA, 0xFD,
    0xCB, 0x0B, 0xCB, 0x1B, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0x06, 0xA4, 0xE6, 0xE9, 0xEE,
    0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFB, 0x6B, 0xE9, 0xEE, 0xE9, 0xF4, 0xE9,
    0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFB, 0x6C, 0xED, 0xE5, 0xE4, 0xE9, 0xE1,
    0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFB, 0x6D, 0xEB, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1,
    0xEE, 0x61, 0x80, 0x30, 0xF9, 0xEE, 0xF5, 0x73, 0x80, 0x26, 0x40, 0xF2, 0xF4, 0xE9, 0xE3, 0xE1,
    0x6C, 0x02, 0xCB, 0x46, 0xCB, 0x4C, 0xE2, 0xE1, 0x72, 0x80, 0x00, 0x7C, 0xEC, 0xE9, 0xEE, 0x65,
    0x04, 0xCB, 0x59, 0xCB, 0x64, 0xCB, 0x6F, 0xCB, 0x78, 0xE1, 0xE2, 0xEF, 0xF6, 0xE5, 0xE3, 0xED,
    0x62, 0x80, 0x03, 0x0D, 0xE2, 0xE5, 0xEC, 0xEF, 0xF7, 0xE3, 0xED, 0x62, 0x80, 0x03, 0x29, 0xEC,
    0xEF, 0xF7, 0xED, 0xEF, 0x64, 0x80, 0x02, 0xCC, 0xED, 0xEF, 0x64, 0x80, 0x02, 0xC8, 0xF7, 0xE1,
    0xF2, 0xED, 0xE5, 0xEE, 0xE9, 0xE1, 0x6E, 0x80, 0x05, 0x7E, 0xE8, 0xEF, 0xEF, 0x6B, 0x80, 0x02,
    0x8B, 0x69, 0x03, 0xCB, 0x99, 0xCB, 0xA4, 0xCB, 0xCB, 0xEB, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1, 0xEE,
    0x61, 0x80, 0x30, 0xF8, 0xF2, 0xE1, 0xED, 0x61, 0x03, 0xCB, 0xAF, 0xCB, 0xB9, 0xCB, 0xC0, 0xE2,
    0xE5, 0xEE, 0xE7, 0xE1, 0xEC, 0x69, 0x80, 0x09, 0xCD, 0xE4, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x4D,
    0xE7, 0xF5, 0xEA, 0xE1, 0xF2, 0xE1, 0xF4, 0x69, 0x80, 0x0A, 0xCD, 0xF3, 0xE1, 0xF2, 0xE7, 0x61,
    0x03, 0xCB, 0xD7, 0xCB, 0xE1, 0xCB, 0xE8, 0xE2, 0xE5, 0xEE, 0xE7, 0xE1, 0xEC, 0x69, 0x80, 0x09,
    0x83, 0xE4, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x03, 0xE7, 0xF5, 0xEA, 0xE1, 0xF2, 0xE1, 0xF4, 0x69,
    0x80, 0x0A, 0x83, 0xED, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80, 0xFF, 0x56, 0x6F,
    0x03, 0xCC, 0x07, 0xCC, 0x12, 0xCC, 0x58, 0xE1, 0xF2, 0xED, 0xE5, 0xEE, 0xE9, 0xE1, 0x6E, 0x80,
    0x05, 0x78, 0xE9, 0xE3, 0xE5, 0x64, 0x02, 0xCC, 0x1B, 0xCC, 0x3F, 0xE9, 0xF4, 0xE5, 0xF2, 0xE1,
    0xF4, 0xE9, 0xEF, 0x6E, 0x02, 0xCC, 0x29, 0xCC, 0x34, 0xE8, 0xE9, 0xF2, 0xE1, 0xE7, 0xE1, 0xEE,
    0x61, 0x80, 0x30, 0x9E, 0xEB, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0xFE, 0xED,
    0xE1, 0xF2, 0xEB, 0xEB, 0xE1, 0xEE, 0x61, 0x81, 0x30, 0x9B, 0xCC, 0x4C, 0xE8, 0xE1, 0xEC, 0xE6,
    0xF7, 0xE9, 0xE4, 0xF4, 0x68, 0x80, 0xFF, 0x9E, 0xEB, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1, 0xEE, 0x61,
    0x80, 0x30, 0xFA, 0xF0, 0xE1, 0xF2, 0xE5, 0x6E, 0x80, 0x24, 0xB1, 0x74, 0x02, 0xCC, 0x71, 0xCC,
    0x78, 0xE9, 0xEC, 0xE4, 0x65, 0x80, 0x1E, 0x7D, 0xF5, 0xF2, 0xEE, 0xE5, 0x64, 0x80, 0x02, 0x8C,
    0x75, 0x02, 0xCC, 0x86, 0xCC, 0x91, 0xE8, 0xE9, 0xF2, 0xE1, 0xE7, 0xE1, 0xEE, 0x61, 0x80, 0x30,
    0x94, 0xEB, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0xF4, 0x77, 0x8F, 0x00, 0x77,
    0xCC, 0xBE, 0xCD, 0xA7, 0xCD, 0xB1, 0xCD, 0xC8, 0xCD, 0xF0, 0xCE, 0x33, 0xCE, 0x3B, 0xD0, 0x1E,
    0xD0, 0x47, 0xD0, 0x53, 0xD0, 0x9E, 0xD0, 0xA6, 0xD0, 0xAD, 0xD0, 0xB8, 0xD0, 0xC1, 0x61, 0x08,
    0xCC, 0xD0, 0xCC, 0xD7, 0xCC, 0xE1, 0xCC, 0xEC, 0xCD, 0x12, 0xCD, 0x32, 0xCD, 0x3E, 0xCD, 0x62,
    0xE3, 0xF5, 0xF4, 0x65, 0x80, 0x1E, 0x83, 0xE5, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31,
    0x59, 0xE8, 0xE9, 0xF2, 0xE1, 0xE7, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0x8F, 0x6B, 0x02, 0xCC, 0xF2,
    0xCD, 0x0A, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1, 0xEE, 0x61, 0x81, 0x30, 0xEF, 0xCC, 0xFE, 0xE8, 0xE1,
    0xEC, 0xE6, 0xF7, 0xE9, 0xE4, 0xF4, 0x68, 0x80, 0xFF, 0x9C, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80,
    0x31, 0x58, 0xF3, 0xED, 0xE1, 0xEC, 0x6C, 0x02, 0xCD, 0x1C, 0xCD, 0x27, 0xE8, 0xE9, 0xF2, 0xE1,
    0xE7, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0x8E, 0xEB, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1, 0xEE, 0x61, 0x80,
    0x30, 0xEE, 0xF4, 0xF4, 0xEF, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0x57, 0x76, 0x02,
    0xCD, 0x44, 0xCD, 0x4C, 0xE5, 0xE4, 0xE1, 0xF3, 0x68, 0x80, 0x30, 0x1C, 0xF9, 0xF5, 0xEE, 0xE4,
    0xE5, 0xF2, 0xF3, 0xE3, 0xEF, 0xF2, 0xE5, 0xF6, 0xE5, 0xF2, 0xF4, 0xE9, 0xE3, 0xE1, 0x6C, 0x80,
    0xFE, 0x34, 0x77, 0x03, 0xCD, 0x6A, 0xCD, 0x73, 0xCD, 0x81, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63,
    0x80, 0x06, 0x48, 0xE6, 0xE9, 0xEE, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE,
    0xEE, 0xE8, 0xE1, 0xED, 0xFA, 0xE1, 0xE1, 0xE2, 0xEF, 0xF6, 0x65, 0x02, 0xCD, 0x90, 0xCD, 0x99,
    0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0x06, 0x24, 0xE6, 0xE9, 0xEE, 0xE1, 0xEC, 0xE1, 0xF2,
    0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE, 0x86, 0xE2, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33,
    0xDD, 0xE3, 0xE9, 0xF2, 0x63, 0x02, 0xCD, 0xBA, 0xCD, 0xBF, 0xEC, 0x65, 0x80, 0x24, 0xE6, 0xF5,
    0xED, 0xE6, 0xEC, 0xE5, 0x78, 0x80, 0x01, 0x75, 0x64, 0x02, 0xCD, 0xCE, 0xCD, 0xD8, 0xE9, 0xE5,
    0xF2, 0xE5, 0xF3, 0xE9, 0x73, 0x80, 0x1E, 0x85, 0xEF, 0x74, 0x02, 0xCD, 0xDF, 0xCD, 0xE8, 0xE1,
    0xE3, 0xE3, 0xE5, 0xEE, 0x74, 0x80, 0x1E, 0x87, 0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E, 0x89,
    0x65, 0x04, 0xCD, 0xFA, 0xCE, 0x05, 0xCE, 0x11, 0xCE, 0x29, 0xE8, 0xE9, 0xF2, 0xE1, 0xE7, 0xE1,
    0xEE, 0x61, 0x80, 0x30, 0x91, 0xE9, 0xE5, 0xF2, 0xF3, 0xF4, 0xF2, 0xE1, 0xF3, 0x73, 0x80, 0x21,
    0x18, 0x6B, 0x02, 0xCE, 0x17, 0xCE, 0x21, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1, 0xEE, 0x61, 0x80, 0x30,
    0xF1, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31, 0x5E, 0xEF, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E,
    0x80, 0x31, 0x5D, 0xE7, 0xF2, 0xE1, 0xF6, 0x65, 0x80, 0x1E, 0x81, 0xE8, 0xE9, 0xF4, 0x65, 0x08,
    0xCE, 0x50, 0xCE, 0x59, 0xCE, 0xAD, 0xCF, 0x07, 0xCF, 0x5B, 0xCF, 0x88, 0xCF, 0xBC, 0xCF, 0xF4,
    0xE2, 0xF5, 0xEC, 0xEC, 0xE5, 0x74, 0x80, 0x25, 0xE6, 0x63, 0x02, 0xCE, 0x5F, 0xCE, 0x73, 0xE9,
    0xF2, 0xE3, 0xEC, 0x65, 0x81, 0x25, 0xCB, 0xCE, 0x69, 0xE9, 0xEE, 0xF6, 0xE5, 0xF2, 0xF3, 0x65,
    0x80, 0x25, 0xD9, 0xEF, 0xF2, 0xEE, 0xE5, 0xF2, 0xE2, 0xF2, 0xE1, 0xE3, 0xEB, 0xE5, 0x74, 0x02,
    0xCE, 0x84, 0xCE, 0x98, 0xEC, 0xE5, 0xE6, 0x74, 0x81, 0x30, 0x0E, 0xCE, 0x8D, 0xF6, 0xE5, 0xF2,
    0xF4, 0xE9, 0xE3, 0xE1, 0x6C, 0x80, 0xFE, 0x43, 0xF2, 0xE9, 0xE7, 0xE8, 0x74, 0x81, 0x30, 0x0F,
    0xCE, 0xA2, 0xF6, 0xE5, 0xF2, 0xF4, 0xE9, 0xE3, 0xE1, 0x6C, 0x80, 0xFE, 0x44, 0x64, 0x02, 0xCE,
    0xB3, 0xCE, 0xDC, 0xE9, 0xE1, 0xED, 0xEF, 0xEE, 0x64, 0x81, 0x25, 0xC7, 0xCE, 0xBE, 0xE3, 0xEF,
    0xEE, 0xF4, 0xE1, 0xE9, 0xEE, 0xE9, 0xEE, 0xE7, 0xE2, 0xEC, 0xE1, 0xE3, 0xEB, 0xF3, 0xED, 0xE1,
    0xEC, 0xEC, 0xE4, 0xE9, 0xE1, 0xED, 0xEF, 0xEE, 0x64, 0x80, 0x25, 0xC8, 0xEF, 0xF7, 0xEE, 0xF0,
    0xEF, 0xE9, 0xEE, 0xF4, 0xE9, 0xEE, 0x67, 0x02, 0xCE, 0xEC, 0xCE, 0xFC, 0xF3, 0xED, 0xE1, 0xEC,
    0xEC, 0xF4, 0xF2, 0xE9, 0xE1, 0xEE, 0xE7, 0xEC, 0x65, 0x80, 0x25, 0xBF, 0xF4, 0xF2, 0xE9, 0xE1,
    0xEE, 0xE7, 0xEC, 0x65, 0x80, 0x25, 0xBD, 0xEC, 0x65, 0x02, 0xCF, 0x0E, 0xCF, 0x38, 0xE6, 0xF4,
    0xF0, 0xEF, 0xE9, 0xEE, 0xF4, 0xE9, 0xEE, 0x67, 0x02, 0xCF, 0x1D, 0xCF, 0x2D, 0xF3, 0xED, 0xE1,
    0xEC, 0xEC, 0xF4, 0xF2, 0xE9, 0xE1, 0xEE, 0xE7, 0xEC, 0x65, 0x80, 0x25, 0xC3, 0xF4, 0xF2, 0xE9,
    0xE1, 0xEE, 0xE7, 0xEC, 0x65, 0x80, 0x25, 0xC1, 0xEE, 0xF4, 0xE9, 0xE3, 0xF5, 0xEC, 0xE1, 0xF2,
    0xE2, 0xF2, 0xE1, 0xE3, 0xEB, 0xE5, 0x74, 0x02, 0xCF, 0x4C, 0xCF, 0x53, 0xEC, 0xE5, 0xE6, 0x74,
    0x80, 0x30, 0x16, 0xF2, 0xE9, 0xE7, 0xE8, 0x74, 0x80, 0x30, 0x17, 0xF2, 0xE9, 0xE7, 0xE8, 0xF4,
    0xF0, 0xEF, 0xE9, 0xEE, 0xF4, 0xE9, 0xEE, 0x67, 0x02, 0xCF, 0x6D, 0xCF, 0x7D, 0xF3, 0xED, 0xE1,
    0xEC, 0xEC, 0xF4, 0xF2, 0xE9, 0xE1, 0xEE, 0xE7, 0xEC, 0x65, 0x80, 0x25, 0xB9, 0xF4, 0xF2, 0xE9,
    0xE1, 0xEE, 0xE7, 0xEC, 0x65, 0x80, 0x25, 0xB7, 0x73, 0x03, 0xCF, 0x90, 0xCF, 0xAE, 0xCF, 0xB6,
    0x6D, 0x02, 0xCF, 0x96, 0xCF, 0xA2, 0xE1, 0xEC, 0xEC, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80,
    0x25, 0xAB, 0xE9, 0xEC, 0xE9, 0xEE, 0xE7, 0xE6, 0xE1, 0xE3, 0x65, 0x80, 0x26, 0x3A, 0xF1, 0xF5,
    0xE1, 0xF2, 0x65, 0x80, 0x25, 0xA1, 0xF4, 0xE1, 0x72, 0x80, 0x26, 0x06, 0x74, 0x02, 0xCF, 0xC2,
    0xCF, 0xCD, 0xE5, 0xEC, 0xE5, 0xF0, 0xE8, 0xEF, 0xEE, 0x65, 0x80, 0x26, 0x0F, 0xEF, 0xF2, 0xF4,
    0xEF, 0xE9, 0xF3, 0xE5, 0xF3, 0xE8, 0xE5, 0xEC, 0xEC, 0xE2, 0xF2, 0xE1, 0xE3, 0xEB, 0xE5, 0x74,
    0x02, 0xCF, 0xE5, 0xCF, 0xEC, 0xEC, 0xE5, 0xE6, 0x74, 0x80, 0x30, 0x18, 0xF2, 0xE9, 0xE7, 0xE8,
    0x74, 0x80, 0x30, 0x19, 0xF5, 0xF0, 0xF0, 0xEF, 0xE9, 0xEE, 0xF4, 0xE9, 0xEE, 0x67, 0x02, 0xD0,
    0x03, 0xD0, 0x13, 0xF3, 0xED, 0xE1, 0xEC, 0xEC, 0xF4, 0xF2, 0xE9, 0xE1, 0xEE, 0xE7, 0xEC, 0x65,
    0x80, 0x25, 0xB5, 0xF4, 0xF2, 0xE9, 0xE1, 0xEE, 0xE7, 0xEC, 0x65, 0x80, 0x25, 0xB3, 0x69, 0x02,
    0xD0, 0x24, 0xD0, 0x2F, 0xE8, 0xE9, 0xF2, 0xE1, 0xE7, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0x90, 0x6B,
    0x02, 0xD0, 0x35, 0xD0, 0x3F, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0xF0, 0xEF,
    0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31, 0x5F, 0xED, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65,
    0x80, 0xFF, 0x57, 0x6F, 0x04, 0xD0, 0x5D, 0xD0, 0x68, 0xD0, 0x81, 0xD0, 0x93, 0xE8, 0xE9, 0xF2,
    0xE1, 0xE7, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0x92, 0xEB, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1, 0xEE, 0x61,
    0x81, 0x30, 0xF2, 0xD0, 0x75, 0xE8, 0xE1, 0xEC, 0xE6, 0xF7, 0xE9, 0xE4, 0xF4, 0x68, 0x80, 0xFF,
    0x66, 0x6E, 0x81, 0x20, 0xA9, 0xD0, 0x87, 0xED, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65,
    0x80, 0xFF, 0xE6, 0xF7, 0xE1, 0xE5, 0xEE, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x27, 0xF0, 0xE1,
    0xF2, 0xE5, 0x6E, 0x80, 0x24, 0xB2, 0xF2, 0xE9, 0xEE, 0x67, 0x80, 0x1E, 0x98, 0xF3, 0xF5, 0xF0,
    0xE5, 0xF2, 0xE9, 0xEF, 0x72, 0x80, 0x02, 0xB7, 0xF4, 0xF5, 0xF2, 0xEE, 0xE5, 0x64, 0x80, 0x02,
    0x8D, 0xF9, 0xEE, 0x6E, 0x80, 0x01, 0xBF, 0x78, 0x89, 0x00, 0x78, 0xD0, 0xDD, 0xD0, 0xE8, 0xD0,
    0xF3, 0xD0, 0xFC, 0xD1, 0x17, 0xD1, 0x24, 0xD1, 0x28, 0xD1, 0x34, 0xD1, 0x3C, 0xE1, 0xE2, 0xEF,
    0xF6, 0xE5, 0xE3, 0xED, 0x62, 0x80, 0x03, 0x3D, 0xE2, 0xEF, 0xF0, 0xEF, 0xED, 0xEF, 0xE6, 0x6F,
    0x80, 0x31, 0x12, 0xE3, 0xE9, 0xF2, 0xE3, 0xEC, 0x65, 0x80, 0x24, 0xE7, 0x64, 0x02, 0xD1, 0x02,
    0xD1, 0x0C, 0xE9, 0xE5, 0xF2, 0xE5, 0xF3, 0xE9, 0x73, 0x80, 0x1E, 0x8D, 0xEF, 0xF4, 0xE1, 0xE3,
    0xE3, 0xE5, 0xEE, 0x74, 0x80, 0x1E, 0x8B, 0xE5, 0xE8, 0xE1, 0xF2, 0xED, 0xE5, 0xEE, 0xE9, 0xE1,
    0x6E, 0x80, 0x05, 0x6D, 0x69, 0x80, 0x03, 0xBE, 0xED, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3,
    0x65, 0x80, 0xFF, 0x58, 0xF0, 0xE1, 0xF2, 0xE5, 0x6E, 0x80, 0x24, 0xB3, 0xF3, 0xF5, 0xF0, 0xE5,
    0xF2, 0xE9, 0xEF, 0x72, 0x80, 0x02, 0xE3, 0x79, 0x8F, 0x00, 0x79, 0xD1, 0x69, 0xD2, 0x40, 0xD2,
    0x57, 0xD2, 0x7F, 0xD4, 0x5D, 0xD4, 0x65, 0xD4, 0x76, 0xD4, 0xB6, 0xD4, 0xC2, 0xD5, 0xBF, 0xD5,
    0xE7, 0xD5, 0xF3, 0xD5, 0xFE, 0xD6, 0x13, 0xD6, 0xF8, 0x61, 0x0B, 0xD1, 0x81, 0xD1, 0x8D, 0xD1,
    0x97, 0xD1, 0x9E, 0xD1, 0xA5, 0xD1, 0xAF, 0xD1, 0xC8, 0xD1, 0xD3, 0xD1, 0xF9, 0xD2, 0x06, 0xD2,
    0x34, 0xE1, 0xE4, 0xEF, 0xF3, 0xF1, 0xF5, 0xE1, 0xF2, 0x65, 0x80, 0x33, 0x4E, 0xE2, 0xE5, 0xEE,
    0xE7, 0xE1, 0xEC, 0x69, 0x80, 0x09, 0xAF, 0xE3, 0xF5, 0xF4, 0x65, 0x80, 0x00, 0xFD, 0xE4, 0xE5,
    0xF6, 0x61, 0x80, 0x09, 0x2F, 0xE5, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31, 0x52, 0xE7,
    0x75, 0x02, 0xD1, 0xB6, 0xD1, 0xBF, 0xEA, 0xE1, 0xF2, 0xE1, 0xF4, 0x69, 0x80, 0x0A, 0xAF, 0xF2,
    0xED, 0xF5, 0xEB, 0xE8, 0x69, 0x80, 0x0A, 0x2F, 0xE8, 0xE9, 0xF2, 0xE1, 0xE7, 0xE1, 0xEE, 0x61,
    0x80, 0x30, 0x84, 0x6B, 0x02, 0xD1, 0xD9, 0xD1, 0xF1, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1, 0xEE, 0x61,
    0x81, 0x30, 0xE4, 0xD1, 0xE5, 0xE8, 0xE1, 0xEC, 0xE6, 0xF7, 0xE9, 0xE4, 0xF4, 0x68, 0x80, 0xFF,
    0x94, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31, 0x51, 0xED, 0xE1, 0xEB, 0xEB, 0xE1, 0xEE, 0xF4,
    0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x4E, 0xF3, 0xED, 0xE1, 0xEC, 0x6C, 0x02, 0xD2, 0x10, 0xD2, 0x1B,
    0xE8, 0xE9, 0xF2, 0xE1, 0xE7, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0x83, 0xEB, 0xE1, 0xF4, 0xE1, 0xEB,
    0xE1, 0xEE, 0x61, 0x81, 0x30, 0xE3, 0xD2, 0x28, 0xE8, 0xE1, 0xEC, 0xE6, 0xF7, 0xE9, 0xE4, 0xF4,
    0x68, 0x80, 0xFF, 0x6C, 0xF4, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x63,
    0xE3, 0xE9, 0xF2, 0x63, 0x02, 0xD2, 0x49, 0xD2, 0x4E, 0xEC, 0x65, 0x80, 0x24, 0xE8, 0xF5, 0xED,
    0xE6, 0xEC, 0xE5, 0x78, 0x80, 0x01, 0x77, 0x64, 0x02, 0xD2, 0x5D, 0xD2, 0x67, 0xE9, 0xE5, 0xF2,
    0xE5, 0xF3, 0xE9, 0x73, 0x80, 0x00, 0xFF, 0xEF, 0x74, 0x02, 0xD2, 0x6E, 0xD2, 0x77, 0xE1, 0xE3,
    0xE3, 0xE5, 0xEE, 0x74, 0x80, 0x1E, 0x8F, 0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E, 0xF5, 0x65,
    0x07, 0xD2, 0x8F, 0xD3, 0x97, 0xD3, 0xA0, 0xD3, 0xB2, 0xD3, 0xD2, 0xD4, 0x1E, 0xD4, 0x51, 0x68,
    0x08, 0xD2, 0xA1, 0xD2, 0xAA, 0xD2, 0xCC, 0xD2, 0xDA, 0xD3, 0x23, 0xD3, 0x33, 0xD3, 0x6E, 0xD3,
    0x80, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0x06, 0x4A, 0xE2, 0xE1, 0xF2, 0xF2, 0xE5, 0x65,
    0x02, 0xD2, 0xB5, 0xD2, 0xBE, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0x06, 0xD2, 0xE6, 0xE9,
    0xEE, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFB, 0xAF, 0xE6, 0xE9, 0xEE, 0xE1,
    0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE, 0xF2, 0xE8, 0xE1, 0xED, 0xFA, 0xE1, 0xE1,
    0xE2, 0xEF, 0xF6, 0x65, 0x04, 0xD2, 0xED, 0xD2, 0xF6, 0xD3, 0x04, 0xD3, 0x14, 0xE1, 0xF2, 0xE1,
    0xE2, 0xE9, 0x63, 0x80, 0x06, 0x26, 0xE6, 0xE9, 0xEE, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9,
    0x63, 0x80, 0xFE, 0x8A, 0xE9, 0xEE, 0xE9, 0xF4, 0xE9, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9,
    0x63, 0x80, 0xFE, 0x8B, 0xED, 0xE5, 0xE4, 0xE9, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63,
    0x80, 0xFE, 0x8C, 0xE9, 0xEE, 0xE9, 0xF4, 0xE9, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63,
    0x80, 0xFE, 0xF3, 0xED, 0x65, 0x02, 0xD3, 0x3A, 0xD3, 0x47, 0xE4, 0xE9, 0xE1, 0xEC, 0xE1, 0xF2,
    0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE, 0xF4, 0xE5, 0xED, 0x69, 0x02, 0xD3, 0x4F, 0xD3, 0x5E, 0xEE,
    0xE9, 0xF4, 0xE9, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFC, 0xDD, 0xF3, 0xEF,
    0xEC, 0xE1, 0xF4, 0xE5, 0xE4, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFC, 0x58, 0xEE, 0xEF,
    0xEF, 0xEE, 0xE6, 0xE9, 0xEE, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFC, 0x94,
    0xF4, 0xE8, 0xF2, 0xE5, 0xE5, 0xE4, 0xEF, 0xF4, 0xF3, 0xE2, 0xE5, 0xEC, 0xEF, 0xF7, 0xE1, 0xF2,
    0xE1, 0xE2, 0xE9, 0x63, 0x80, 0x06, 0xD1, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31, 0x56,
    0x6E, 0x81, 0x00, 0xA5, 0xD3, 0xA6, 0xED, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80,
    0xFF, 0xE5, 0x6F, 0x02, 0xD3, 0xB8, 0xD3, 0xC1, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31,
    0x55, 0xF2, 0xE9, 0xEE, 0xE8, 0xE9, 0xE5, 0xF5, 0xE8, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80,
    0x31, 0x86, 0x72, 0x03, 0xD3, 0xDA, 0xD3, 0xFE, 0xD4, 0x0A, 0xE1, 0xE8, 0xE2, 0xE5, 0xEE, 0xF9,
    0xEF, 0xED, 0x6F, 0x02, 0xD3, 0xE8, 0xD3, 0xF1, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05,
    0xAA, 0xEC, 0xE5, 0xE6, 0xF4, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xAA, 0xE9, 0xE3,
    0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x4B, 0xF5, 0xE4, 0xE9, 0xE5, 0xF2, 0xE5,
    0xF3, 0xE9, 0xF3, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0xF9, 0xF3, 0xE9,
    0xE5, 0xF5, 0xEE, 0x67, 0x03, 0xD4, 0x2B, 0xD4, 0x34, 0xD4, 0x44, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1,
    0x6E, 0x80, 0x31, 0x81, 0xF0, 0xE1, 0xEE, 0xF3, 0xE9, 0xEF, 0xF3, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1,
    0x6E, 0x80, 0x31, 0x83, 0xF3, 0xE9, 0xEF, 0xF3, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31,
    0x82, 0xF4, 0xE9, 0xF6, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0x9A, 0xE7, 0xF2, 0xE1,
    0xF6, 0x65, 0x80, 0x1E, 0xF3, 0xE8, 0xEF, 0xEF, 0x6B, 0x81, 0x01, 0xB4, 0xD4, 0x6E, 0xE1, 0xE2,
    0xEF, 0xF6, 0x65, 0x80, 0x1E, 0xF7, 0x69, 0x05, 0xD4, 0x82, 0xD4, 0x8D, 0xD4, 0x98, 0xD4, 0xA1,
    0xD4, 0xA9, 0xE1, 0xF2, 0xED, 0xE5, 0xEE, 0xE9, 0xE1, 0x6E, 0x80, 0x05, 0x75, 0xE3, 0xF9, 0xF2,
    0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x57, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31,
    0x62, 0xEE, 0xF9, 0xE1, 0xEE, 0x67, 0x80, 0x26, 0x2F, 0xF7, 0xEE, 0xE1, 0xF2, 0xED, 0xE5, 0xEE,
    0xE9, 0xE1, 0x6E, 0x80, 0x05, 0x82, 0xED, 0xEF, 0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80,
    0xFF, 0x59, 0x6F, 0x07, 0xD4, 0xD2, 0xD5, 0x18, 0xD5, 0x23, 0xD5, 0x2D, 0xD5, 0x53, 0xD5, 0x81,
    0xD5, 0x8A, 0x64, 0x83, 0x05, 0xD9, 0xD4, 0xDC, 0xD4, 0xF0, 0xD4, 0xF9, 0xE4, 0xE1, 0xE7, 0xE5,
    0xF3, 0x68, 0x81, 0xFB, 0x39, 0xD4, 0xE7, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0xFB, 0x39,
    0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xD9, 0xF9, 0xEF, 0x64, 0x02, 0xD5, 0x01, 0xD5,
    0x0A, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xF2, 0xF0, 0xE1, 0xF4, 0xE1, 0xE8, 0xE8,
    0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0xFB, 0x1F, 0xE8, 0xE9, 0xF2, 0xE1, 0xE7, 0xE1, 0xEE, 0x61,
    0x80, 0x30, 0x88, 0xE9, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31, 0x89, 0x6B, 0x02, 0xD5,
    0x33, 0xD5, 0x4B, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1, 0xEE, 0x61, 0x81, 0x30, 0xE8, 0xD5, 0x3F, 0xE8,
    0xE1, 0xEC, 0xE6, 0xF7, 0xE9, 0xE4, 0xF4, 0x68, 0x80, 0xFF, 0x96, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E,
    0x80, 0x31, 0x5B, 0xF3, 0xED, 0xE1, 0xEC, 0x6C, 0x02, 0xD5, 0x5D, 0xD5, 0x68, 0xE8, 0xE9, 0xF2,
    0xE1, 0xE7, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0x87, 0xEB, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1, 0xEE, 0x61,
    0x81, 0x30, 0xE7, 0xD5, 0x75, 0xE8, 0xE1, 0xEC, 0xE6, 0xF7, 0xE9, 0xE4, 0xF4, 0x68, 0x80, 0xFF,
    0x6E, 0xF4, 0xE7, 0xF2, 0xE5, 0xE5, 0x6B, 0x80, 0x03, 0xF3, 0x79, 0x02, 0xD5, 0x90, 0xD5, 0xB5,
    0x61, 0x02, 0xD5, 0x96, 0xD5, 0xA0, 0xE5, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31, 0x88,
    0x6B, 0x02, 0xD5, 0xA6, 0xD5, 0xAE, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31, 0x87, 0xF4, 0xE8,
    0xE1, 0x69, 0x80, 0x0E, 0x22, 0xE9, 0xEE, 0xE7, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x0D, 0x70,
    0x02, 0xD5, 0xC5, 0xD5, 0xCC, 0xE1, 0xF2, 0xE5, 0x6E, 0x80, 0x24, 0xB4, 0xEF, 0xE7, 0xE5, 0xE7,
    0xF2, 0xE1, 0xED, 0xED, 0xE5, 0xEE, 0x69, 0x81, 0x03, 0x7A, 0xD5, 0xDC, 0xE7, 0xF2, 0xE5, 0xE5,
    0xEB, 0xE3, 0xED, 0x62, 0x80, 0x03, 0x45, 0x72, 0x81, 0x01, 0xA6, 0xD5, 0xED, 0xE9, 0xEE, 0x67,
    0x80, 0x1E, 0x99, 0xF3, 0xF5, 0xF0, 0xE5, 0xF2, 0xE9, 0xEF, 0x72, 0x80, 0x02, 0xB8, 0x74, 0x02,
    0xD6, 0x04, 0xD6, 0x0B, 0xE9, 0xEC, 0xE4, 0x65, 0x80, 0x1E, 0xF9, 0xF5, 0xF2, 0xEE, 0xE5, 0x64,
    0x80, 0x02, 0x8E, 0x75, 0x05, 0xD6, 0x1F, 0xD6, 0x2A, 0xD6, 0x34, 0xD6, 0x5A, 0xD6, 0xDE, 0xE8,
    0xE9, 0xF2, 0xE1, 0xE7, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0x86, 0xE9, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1,
    0x6E, 0x80, 0x31, 0x8C, 0x6B, 0x02, 0xD6, 0x3A, 0xD6, 0x52, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1, 0xEE,
    0x61, 0x81, 0x30, 0xE6, 0xD6, 0x46, 0xE8, 0xE1, 0xEC, 0xE6, 0xF7, 0xE9, 0xE4, 0xF4, 0x68, 0x80,
    0xFF, 0x95, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31, 0x60, 0x73, 0x03, 0xD6, 0x62, 0xD6, 0x88,
    0xD6, 0xB1, 0xE2, 0xE9, 0x67, 0x02, 0xD6, 0x6A, 0xD6, 0x75, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC,
    0xE9, 0x63, 0x80, 0x04, 0x6B, 0xE9, 0xEF, 0xF4, 0xE9, 0xE6, 0xE9, 0xE5, 0xE4, 0xE3, 0xF9, 0xF2,
    0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x6D, 0xEC, 0xE9, 0xF4, 0xF4, 0xEC, 0x65, 0x02, 0xD6,
    0x93, 0xD6, 0x9E, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x67, 0xE9, 0xEF,
    0xF4, 0xE9, 0xE6, 0xE9, 0xE5, 0xE4, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04,
    0x69, 0xED, 0xE1, 0xEC, 0x6C, 0x02, 0xD6, 0xBA, 0xD6, 0xC5, 0xE8, 0xE9, 0xF2, 0xE1, 0xE7, 0xE1,
    0xEE, 0x61, 0x80, 0x30, 0x85, 0xEB, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1, 0xEE, 0x61, 0x81, 0x30, 0xE5,
    0xD6, 0xD2, 0xE8, 0xE1, 0xEC, 0xE6, 0xF7, 0xE9, 0xE4, 0xF4, 0x68, 0x80, 0xFF, 0x6D, 0xF9, 0x65,
    0x02, 0xD6, 0xE5, 0xD6, 0xEE, 0xEB, 0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31, 0x8B, 0xEF, 0xEB,
    0xEF, 0xF2, 0xE5, 0xE1, 0x6E, 0x80, 0x31, 0x8A, 0xF9, 0x61, 0x02, 0xD6, 0xFF, 0xD7, 0x09, 0xE2,
    0xE5, 0xEE, 0xE7, 0xE1, 0xEC, 0x69, 0x80, 0x09, 0xDF, 0xE4, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x5F,
    0x7A, 0x8E, 0x00, 0x7A, 0xD7, 0x30, 0xD8, 0x38, 0xD8, 0x43, 0xD8, 0x6E, 0xD8, 0x89, 0xD9, 0xAC,
    0xDA, 0x18, 0xDA, 0x42, 0xDA, 0x4E, 0xDA, 0x5A, 0xDA, 0x76, 0xDA, 0x7E, 0xDA, 0x8E, 0xDA, 0x97,
    0x61, 0x0A, 0xD7, 0x46, 0xD7, 0x51, 0xD7, 0x58, 0xD7, 0x5F, 0xD7, 0x6A, 0xD7, 0xB8, 0xD7, 0xD6,
    0xD7, 0xE1, 0xD8, 0x05, 0xD8, 0x11, 0xE1, 0xF2, 0xED, 0xE5, 0xEE, 0xE9, 0xE1, 0x6E, 0x80, 0x05,
    0x66, 0xE3, 0xF5, 0xF4, 0x65, 0x80, 0x01, 0x7A, 0xE4, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x5B, 0xE7,
    0xF5, 0xF2, 0xED, 0xF5, 0xEB, 0xE8, 0x69, 0x80, 0x0A, 0x5B, 0x68, 0x04, 0xD7, 0x74, 0xD7, 0x7D,
    0xD7, 0x8B, 0xD7, 0xA9, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0x06, 0x38, 0xE6, 0xE9, 0xEE,
    0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE, 0xC6, 0x69, 0x02, 0xD7, 0x91, 0xD7,
    0xA0, 0xEE, 0xE9, 0xF4, 0xE9, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE, 0xC7,
    0xF2, 0xE1, 0xE7, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0x56, 0xED, 0xE5, 0xE4, 0xE9, 0xE1, 0xEC, 0xE1,
    0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0xFE, 0xC8, 0xE9, 0x6E, 0x02, 0xD7, 0xBF, 0xD7, 0xC8, 0xE1,
    0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0x06, 0x32, 0xE6, 0xE9, 0xEE, 0xE1, 0xEC, 0xE1, 0xF2, 0xE1,
    0xE2, 0xE9, 0x63, 0x80, 0xFE, 0xB0, 0xEB, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1, 0xEE, 0x61, 0x80, 0x30,
    0xB6, 0xF1, 0xE5, 0x66, 0x02, 0xD7, 0xE9, 0xD7, 0xF7, 0xE7, 0xE1, 0xE4, 0xEF, 0xEC, 0xE8, 0xE5,
    0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0x95, 0xF1, 0xE1, 0xF4, 0xE1, 0xEE, 0xE8, 0xE5, 0xE2, 0xF2,
    0xE5, 0x77, 0x80, 0x05, 0x94, 0xF2, 0xF1, 0xE1, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05,
    0x98, 0xF9, 0xE9, 0x6E, 0x82, 0x05, 0xD6, 0xD8, 0x1B, 0xD8, 0x2F, 0xE4, 0xE1, 0xE7, 0xE5, 0xF3,
    0x68, 0x81, 0xFB, 0x36, 0xD8, 0x26, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0xFB, 0x36, 0xE8,
    0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80, 0x05, 0xD6, 0xE2, 0xEF, 0xF0, 0xEF, 0xED, 0xEF, 0xE6, 0x6F,
    0x80, 0x31, 0x17, 0x63, 0x03, 0xD8, 0x4B, 0xD8, 0x52, 0xD8, 0x68, 0xE1, 0xF2, 0xEF, 0x6E, 0x80,
    0x01, 0x7E, 0xE9, 0xF2, 0x63, 0x02, 0xD8, 0x5A, 0xD8, 0x5F, 0xEC, 0x65, 0x80, 0x24, 0xE9, 0xF5,
    0xED, 0xE6, 0xEC, 0xE5, 0x78, 0x80, 0x1E, 0x91, 0xF5, 0xF2, 0x6C, 0x80, 0x02, 0x91, 0xE4, 0xEF,
    0x74, 0x82, 0x01, 0x7C, 0xD8, 0x78, 0xD8, 0x81, 0xE1, 0xE3, 0xE3, 0xE5, 0xEE, 0x74, 0x80, 0x01,
    0x7C, 0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E, 0x93, 0x65, 0x06, 0xD8, 0x97, 0xD8, 0xA2, 0xD8,
    0xCD, 0xD8, 0xD8, 0xD8, 0xE3, 0xD9, 0xA7, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80,
    0x04, 0x37, 0x64, 0x02, 0xD8, 0xA8, 0xD8, 0xBB, 0xE5, 0xF3, 0xE3, 0xE5, 0xEE, 0xE4, 0xE5, 0xF2,
    0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x99, 0xE9, 0xE5, 0xF2, 0xE5, 0xF3,
    0xE9, 0xF3, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0xDF, 0xE8, 0xE9, 0xF2,
    0xE1, 0xE7, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0x5C, 0xEB, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1, 0xEE, 0x61,
    0x80, 0x30, 0xBC, 0xF2, 0x6F, 0x8C, 0x00, 0x30, 0xD9, 0x00, 0xD9, 0x09, 0xD9, 0x13, 0xD9, 0x1A,
    0xD9, 0x33, 0xD9, 0x40, 0xD9, 0x4B, 0xD9, 0x57, 0xD9, 0x62, 0xD9, 0x6C, 0xD9, 0x77, 0xD9, 0x7E,
    0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0x06, 0x60, 0xE2, 0xE5, 0xEE, 0xE7, 0xE1, 0xEC, 0x69,
    0x80, 0x09, 0xE6, 0xE4, 0xE5, 0xF6, 0x61, 0x80, 0x09, 0x66, 0xE7, 0x75, 0x02, 0xD9, 0x21, 0xD9,
    0x2A, 0xEA, 0xE1, 0xF2, 0xE1, 0xF4, 0x69, 0x80, 0x0A, 0xE6, 0xF2, 0xED, 0xF5, 0xEB, 0xE8, 0x69,
    0x80, 0x0A, 0x66, 0xE8, 0xE1, 0xE3, 0xEB, 0xE1, 0xF2, 0xE1, 0xE2, 0xE9, 0x63, 0x80, 0x06, 0x60,
    0xE9, 0xEE, 0xE6, 0xE5, 0xF2, 0xE9, 0xEF, 0x72, 0x80, 0x20, 0x80, 0xED, 0xEF, 0xEE, 0xEF, 0xF3,
    0xF0, 0xE1, 0xE3, 0x65, 0x80, 0xFF, 0x10, 0xEF, 0xEC, 0xE4, 0xF3, 0xF4, 0xF9, 0xEC, 0x65, 0x80,
    0xF7, 0x30, 0xF0, 0xE5, 0xF2, 0xF3, 0xE9, 0xE1, 0x6E, 0x80, 0x06, 0xF0, 0xF3, 0xF5, 0xF0, 0xE5,
    0xF2, 0xE9, 0xEF, 0x72, 0x80, 0x20, 0x70, 0xF4, 0xE8, 0xE1, 0x69, 0x80, 0x0E, 0x50, 0xF7, 0xE9,
    0xE4, 0xF4, 0x68, 0x03, 0xD9, 0x8A, 0xD9, 0x93, 0xD9, 0x9F, 0xEA, 0xEF, 0xE9, 0xEE, 0xE5, 0x72,
    0x80, 0xFE, 0xFF, 0xEE, 0xEF, 0xEE, 0xEA, 0xEF, 0xE9, 0xEE, 0xE5, 0x72, 0x80, 0x20, 0x0C, 0xF3,
    0xF0, 0xE1, 0xE3, 0x65, 0x80, 0x20, 0x0B, 0xF4, 0x61, 0x80, 0x03, 0xB6, 0x68, 0x02, 0xD9, 0xB2,
    0xD9, 0xBD, 0xE2, 0xEF, 0xF0, 0xEF, 0xED, 0xEF, 0xE6, 0x6F, 0x80, 0x31, 0x13, 0x65, 0x04, 0xD9,
    0xC7, 0xD9, 0xD2, 0xD9, 0xE2, 0xD9, 0xED, 0xE1, 0xF2, 0xED, 0xE5, 0xEE, 0xE9, 0xE1, 0x6E, 0x80,
    0x05, 0x6A, 0xE2, 0xF2, 0xE5, 0xF6, 0xE5, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80,
    0x04, 0xC2, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0x36, 0x64, 0x02, 0xD9,
    0xF3, 0xDA, 0x06, 0xE5, 0xF3, 0xE3, 0xE5, 0xEE, 0xE4, 0xE5, 0xF2, 0xE3, 0xF9, 0xF2, 0xE9, 0xEC,
    0xEC, 0xE9, 0x63, 0x80, 0x04, 0x97, 0xE9, 0xE5, 0xF2, 0xE5, 0xF3, 0xE9, 0xF3, 0xE3, 0xF9, 0xF2,
    0xE9, 0xEC, 0xEC, 0xE9, 0x63, 0x80, 0x04, 0xDD, 0x69, 0x03, 0xDA, 0x20, 0xDA, 0x2B, 0xDA, 0x36,
    0xE8, 0xE9, 0xF2, 0xE1, 0xE7, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0x58, 0xEB, 0xE1, 0xF4, 0xE1, 0xEB,
    0xE1, 0xEE, 0x61, 0x80, 0x30, 0xB8, 0xEE, 0xEF, 0xF2, 0xE8, 0xE5, 0xE2, 0xF2, 0xE5, 0x77, 0x80,
    0x05, 0xAE, 0xEC, 0xE9, 0xEE, 0xE5, 0xE2, 0xE5, 0xEC, 0xEF, 0x77, 0x80, 0x1E, 0x95, 0xED, 0xEF,
    0xEE, 0xEF, 0xF3, 0xF0, 0xE1, 0xE3, 0x65, 0x80, 0xFF, 0x5A, 0x6F, 0x02, 0xDA, 0x60, 0xDA, 0x6B,
    0xE8, 0xE9, 0xF2, 0xE1, 0xE7, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0x5E, 0xEB, 0xE1, 0xF4, 0xE1, 0xEB,
    0xE1, 0xEE, 0x61, 0x80, 0x30, 0xBE, 0xF0, 0xE1, 0xF2, 0xE5, 0x6E, 0x80, 0x24, 0xB5, 0xF2, 0xE5,
    0xF4, 0xF2, 0xEF, 0xE6, 0xEC, 0xE5, 0xF8, 0xE8, 0xEF, 0xEF, 0x6B, 0x80, 0x02, 0x90, 0xF3, 0xF4,
    0xF2, 0xEF, 0xEB, 0x65, 0x80, 0x01, 0xB6, 0x75, 0x02, 0xDA, 0x9D, 0xDA, 0xA8, 0xE8, 0xE9, 0xF2,
    0xE1, 0xE7, 0xE1, 0xEE, 0x61, 0x80, 0x30, 0x5A, 0xEB, 0xE1, 0xF4, 0xE1, 0xEB, 0xE1, 0xEE, 0x61,
    0x80, 0x30, 0xBA,
];
