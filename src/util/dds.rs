//! DDS + DX10 header synthesis for texture-chunked archive entries.
//!
//! The chunked texture formats never store a DDS header on disk — only the
//! format/dimensions/mip metadata the per-file record carries. `write_dds`
//! rebuilds the legacy 128-byte `DDS ` header plus the 20-byte DX10
//! extension bit-exactly via `ddsfile`, the same crate this crate's teacher
//! uses for the equivalent job in `util::dds`.

use ddsfile::{AlphaMode, D3D10ResourceDimension, Dds, DxgiFormat, NewDxgiParams};

/// The subset of DXGI formats Creation Engine 2 textures are stored in.
/// Codes are the raw DXGI enumerants the wire format carries.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TextureFormat(pub u32);

impl TextureFormat {
    pub const R8_UNORM: Self = Self(61);
    pub const RGBA8_UNORM: Self = Self(28);
    pub const RGBA8_UNORM_SRGB: Self = Self(29);
    pub const RGBA16_FLOAT: Self = Self(10);
    pub const BC1_UNORM: Self = Self(71);
    pub const BC1_UNORM_SRGB: Self = Self(72);
    pub const BC3_UNORM: Self = Self(77);
    pub const BC3_UNORM_SRGB: Self = Self(78);
    pub const BC4_UNORM: Self = Self(80);
    pub const BC5_UNORM: Self = Self(83);
    pub const BC6H_UF16: Self = Self(95);
    pub const BC7_UNORM: Self = Self(98);
    pub const BC7_UNORM_SRGB: Self = Self(99);

    fn to_dxgi(self) -> anyhow::Result<DxgiFormat> {
        Ok(match self.0 {
            61 => DxgiFormat::R8_UNorm,
            28 => DxgiFormat::R8G8B8A8_UNorm,
            29 => DxgiFormat::R8G8B8A8_UNorm_sRGB,
            10 => DxgiFormat::R16G16B16A16_Float,
            71 => DxgiFormat::BC1_UNorm,
            72 => DxgiFormat::BC1_UNorm_sRGB,
            77 => DxgiFormat::BC3_UNorm,
            78 => DxgiFormat::BC3_UNorm_sRGB,
            80 => DxgiFormat::BC4_UNorm,
            83 => DxgiFormat::BC5_UNorm,
            95 => DxgiFormat::BC6H_UF16,
            98 => DxgiFormat::BC7_UNorm,
            99 => DxgiFormat::BC7_UNorm_sRGB,
            other => anyhow::bail!("unsupported texture format code {other}"),
        })
    }
}

/// Synthesizes the 128-byte legacy `DDS ` header plus the 20-byte DX10
/// extension (148 bytes total), with no pixel data attached.
pub fn write_dds_header(
    format: TextureFormat,
    width: u32,
    height: u32,
    mip_count: u32,
    is_cube_map: bool,
) -> anyhow::Result<[u8; 148]> {
    let dds = Dds::new_dxgi(NewDxgiParams {
        height,
        width,
        depth: None,
        format: format.to_dxgi()?,
        mipmap_levels: Some(mip_count.max(1)),
        array_layers: if is_cube_map { Some(6) } else { None },
        caps2: None,
        is_cubemap: is_cube_map,
        resource_dimension: D3D10ResourceDimension::Texture2D,
        alpha_mode: AlphaMode::Unknown,
    })?;
    let mut buf = Vec::new();
    dds.write(&mut buf)?;
    anyhow::ensure!(buf.len() == 148, "unexpected DDS+DX10 header size {}", buf.len());
    let mut header = [0u8; 148];
    header.copy_from_slice(&buf);
    Ok(header)
}

/// Writes the synthesized header followed by `data` (already-decompressed
/// mip chunk bytes, in mip order) to `w`.
pub fn write_dds<W: std::io::Write>(
    w: &mut W,
    format: TextureFormat,
    width: u32,
    height: u32,
    mip_count: u32,
    is_cube_map: bool,
    data: &[u8],
) -> anyhow::Result<()> {
    let header = write_dds_header(format, width, height, mip_count, is_cube_map)?;
    w.write_all(&header)?;
    w.write_all(data)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_is_148_bytes_and_reports_bc7() {
        let header = write_dds_header(TextureFormat::BC7_UNORM, 2, 2, 1, true).unwrap();
        assert_eq!(header.len(), 148);
        // DX10 header's dxgiFormat field sits right after the 128-byte legacy
        // header, at offset 128 (u32 little-endian).
        let dxgi_format = u32::from_le_bytes(header[128..132].try_into().unwrap());
        assert_eq!(dxgi_format, 98);
        let width = u32::from_le_bytes(header[16..20].try_into().unwrap());
        let height = u32::from_le_bytes(header[12..16].try_into().unwrap());
        assert_eq!((width, height), (2, 2));
    }
}
