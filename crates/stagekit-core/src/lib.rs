//! stagekit core library: Art-Net output and SVG → shader conversion.
//!
//! Two independent tools share this crate:
//! - `protocols::artnet` encodes (and decodes) ArtDMX packets through
//!   layout/writer/reader layers, and `net` sends one packet over UDP.
//! - `svg` extracts `<polygon>` outlines, `geometry` fan-triangulates them,
//!   and `shader` renders an ISF/GLSL fragment shader with one alpha input
//!   per polygon. `convert` chains these into a file-to-file pipeline.
//!
//! Invariants:
//! - An encoded ArtDMX packet is always 530 bytes with a length field of 512.
//! - Shader output is deterministic: polygon order follows the document,
//!   triangle order follows the fan, numeric formatting is fixed.
//!
//! Version française (résumé):
//! Deux outils indépendants : envoi d'un paquet ArtDMX (530 octets) en UDP,
//! et conversion des polygones SVG en shader ISF/GLSL avec un paramètre
//! alpha par polygone. La sortie du shader est déterministe.
//!
//! # Examples
//! ```no_run
//! use std::path::Path;
//!
//! use stagekit_core::{OutputMode, convert_svg_file};
//!
//! let conversion = convert_svg_file(Path::new("dragonfly.svg"), OutputMode::Isf)?;
//! println!("wrote {}", conversion.output.display());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod convert;
mod geometry;
mod net;
pub mod protocols;
mod shader;
mod svg;

pub use convert::{ConvertError, Conversion, convert_svg_file, output_path_for};
pub use geometry::{Point, Polygon, Triangle, polygon_to_triangles};
pub use net::{SendError, SendReport, send_artnet};
pub use protocols::artnet::layout::{ARTNET_PORT, PACKET_LEN};
pub use protocols::artnet::{ArtDmx, ArtDmxPacket, ArtNetError, parse_artdmx};
pub use shader::{
    IsfInput, IsfInputKind, IsfMetadata, IsfValue, OutputMode, POINT_IN_TRIANGLE, RenderedShader,
    ShaderBuilder, ShaderError, ShaderSummary, TestChain, TriangleTest, generate_isf_shader,
    render_shader,
};
pub use svg::{
    DEFAULT_HEIGHT, DEFAULT_WIDTH, SVG_NAMESPACE, SvgDocument, SvgError, parse_points, parse_svg,
    parse_svg_str,
};
