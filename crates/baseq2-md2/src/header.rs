//! MD2 header structure.

use zerocopy::byteorder::little_endian::{I32, U32};
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

use crate::summary::Md2Summary;
use crate::{Error, Result};

/// MD2 file header.
///
/// Every field after `ident` and `version` is a little-endian `i32`. The
/// offsets are byte positions into the rest of the file and are never followed
/// here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned)]
#[repr(C)]
pub struct Md2Header {
    /// Magic bytes, `IDP2`.
    pub ident: [u8; 4],
    /// Format version, 8.
    pub version: U32,
    /// Skin width in pixels.
    pub skin_width: I32,
    /// Skin height in pixels.
    pub skin_height: I32,
    /// Size of one frame in bytes.
    pub frame_size: I32,
    /// Number of skins.
    pub num_skins: I32,
    /// Number of vertices per frame.
    pub num_xyz: I32,
    /// Number of texture coordinates.
    pub num_st: I32,
    /// Number of triangles.
    pub num_tris: I32,
    /// Number of GL command words.
    pub num_glcmds: I32,
    /// Number of frames.
    pub num_frames: I32,
    /// Offset of the skin names.
    pub ofs_skins: I32,
    /// Offset of the texture coordinates.
    pub ofs_st: I32,
    /// Offset of the triangles.
    pub ofs_tris: I32,
    /// Offset of the frames.
    pub ofs_frames: I32,
    /// Offset of the GL commands.
    pub ofs_glcmds: I32,
    /// Offset of the end of the file.
    pub ofs_end: I32,
}

impl Md2Header {
    /// Header size in bytes.
    pub const SIZE: usize = 68;

    /// Magic bytes at the start of every MD2 file.
    pub const IDENT: &'static [u8; 4] = b"IDP2";

    /// The only supported version.
    pub const VERSION: u32 = 8;

    /// Parse a header from the start of `data`.
    ///
    /// Only the first [`Self::SIZE`] bytes are looked at. The ident and
    /// version are checked before the header is handed out.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let (header, _) = Self::read_from_prefix(data).map_err(|_| {
            Error::NotMd2(format!(
                "header needs {} bytes, got {}",
                Self::SIZE,
                data.len()
            ))
        })?;

        if &header.ident != Self::IDENT {
            return Err(Error::NotMd2(format!(
                "bad ident \"{}\"",
                header.ident.escape_ascii()
            )));
        }

        let version = header.version.get();
        if version != Self::VERSION {
            return Err(Error::NotMd2(format!("unsupported version {}", version)));
        }

        Ok(header)
    }

    /// Reduce the header to the counts worth reporting.
    pub fn summary(&self) -> Md2Summary {
        Md2Summary {
            skin: (self.skin_width.get(), self.skin_height.get()),
            num_skins: self.num_skins.get(),
            num_xyz: self.num_xyz.get(),
            num_st: self.num_st.get(),
            num_tris: self.num_tris.get(),
            num_frames: self.num_frames.get(),
        }
    }
}

#[cfg(test)]
mod tests {
    use byteorder::{LittleEndian, WriteBytesExt};

    use super::*;

    fn header_bytes(ident: &[u8; 4], version: u32, fields: [i32; 15]) -> Vec<u8> {
        let mut data = ident.to_vec();
        data.write_u32::<LittleEndian>(version).unwrap();
        for field in fields {
            data.write_i32::<LittleEndian>(field).unwrap();
        }
        data
    }

    const FIELDS: [i32; 15] = [
        256, 128, 40, 1, 198, 245, 332, 1800, 173, 68, 132, 1112, 5096, 39368, 46568,
    ];

    #[test]
    fn test_header_size() {
        assert_eq!(std::mem::size_of::<Md2Header>(), Md2Header::SIZE);
    }

    #[test]
    fn test_parse_valid_header() {
        let data = header_bytes(b"IDP2", 8, FIELDS);
        let header = Md2Header::parse(&data).unwrap();

        assert_eq!(header.skin_width.get(), 256);
        assert_eq!(header.skin_height.get(), 128);
        assert_eq!(header.frame_size.get(), 40);
        assert_eq!(header.num_glcmds.get(), 1800);
        assert_eq!(header.ofs_skins.get(), 68);
        assert_eq!(header.ofs_end.get(), 46568);

        let summary = header.summary();
        assert_eq!(summary.skin, (256, 128));
        assert_eq!(summary.num_skins, 1);
        assert_eq!(summary.num_xyz, 198);
        assert_eq!(summary.num_st, 245);
        assert_eq!(summary.num_tris, 332);
        assert_eq!(summary.num_frames, 173);
    }

    #[test]
    fn test_fields_read_from_fixed_offsets() {
        // Distinct values so a shifted field would be caught.
        let fields: [i32; 15] = std::array::from_fn(|i| (i as i32 + 1) * 0x0101_0101);
        let data = header_bytes(b"IDP2", 8, fields);
        let summary = Md2Header::parse(&data).unwrap().summary();

        let at = |offset: usize| i32::from_le_bytes(data[offset..offset + 4].try_into().unwrap());
        assert_eq!(summary.skin, (at(8), at(12)));
        assert_eq!(summary.num_skins, at(20));
        assert_eq!(summary.num_xyz, at(24));
        assert_eq!(summary.num_st, at(28));
        assert_eq!(summary.num_tris, at(32));
        assert_eq!(summary.num_frames, at(40));
    }

    #[test]
    fn test_negative_fields_are_signed() {
        let mut fields = FIELDS;
        fields[3] = -1;
        let data = header_bytes(b"IDP2", 8, fields);

        assert_eq!(Md2Header::parse(&data).unwrap().summary().num_skins, -1);
    }

    #[test]
    fn test_trailing_data_ignored() {
        let mut data = header_bytes(b"IDP2", 8, FIELDS);
        data.extend_from_slice(&[0xAB; 512]);

        assert!(Md2Header::parse(&data).is_ok());
    }

    #[test]
    fn test_short_header_rejected() {
        let data = header_bytes(b"IDP2", 8, FIELDS);

        for len in [0, 4, 8, 67] {
            let err = Md2Header::parse(&data[..len]).unwrap_err();
            assert!(err.is_format_error(), "len {len}: {err}");
        }
    }

    #[test]
    fn test_bad_ident_rejected() {
        for ident in [b"IDPO", b"IDP3", b"idp2", b"\0\0\0\0"] {
            let data = header_bytes(ident, 8, FIELDS);
            assert!(Md2Header::parse(&data).unwrap_err().is_format_error());
        }
    }

    #[test]
    fn test_bad_version_rejected() {
        for version in [0, 6, 7, 9, u32::MAX] {
            let data = header_bytes(b"IDP2", version, FIELDS);
            let err = Md2Header::parse(&data).unwrap_err();
            assert!(err.to_string().contains(&version.to_string()));
        }
    }
}
