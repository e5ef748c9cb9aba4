use std::fmt;

use super::builder::TestChain;

/// Barycentric point-in-triangle helper. Points on an edge count as inside.
pub const POINT_IN_TRIANGLE: &str = "\
// Point-in-triangle test using barycentric coordinates
bool pointInTriangle(vec2 p, vec2 a, vec2 b, vec2 c) {
  vec2 v0 = c - a;
  vec2 v1 = b - a;
  vec2 v2 = p - a;

  float dot00 = dot(v0, v0);
  float dot01 = dot(v0, v1);
  float dot02 = dot(v0, v2);
  float dot11 = dot(v1, v1);
  float dot12 = dot(v1, v2);

  float denom = dot00 * dot11 - dot01 * dot01;
  if (abs(denom) < 0.0001) return false;

  float invDenom = 1.0 / denom;
  float u = (dot11 * dot02 - dot01 * dot12) * invDenom;
  float v = (dot00 * dot12 - dot01 * dot02) * invDenom;

  return (u >= -0.0001) && (v >= -0.0001) && (u + v <= 1.0001);
}
";

const INDENT: &str = "  ";

/// Complete shader text: ISF header, helper, then `main`.
pub(crate) struct ShaderSource<'a> {
    pub metadata_json: &'a str,
    pub width: f64,
    pub height: f64,
    pub chain: TestChain<'a>,
}

impl fmt::Display for ShaderSource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "/*{}*/", self.metadata_json)?;
        writeln!(f)?;
        writeln!(f, "{POINT_IN_TRIANGLE}")?;
        writeln!(f, "void main() {{")?;
        writeln!(f, "{INDENT}vec2 uv = isf_FragNormCoord;")?;
        writeln!(
            f,
            "{INDENT}vec2 pixelCoord = uv * vec2({:.1}, {:.1});",
            self.width, self.height
        )?;
        writeln!(f)?;
        writeln!(f, "{INDENT}vec4 color = backgroundColor;")?;
        writeln!(f, "{INDENT}float alpha = 0.0;")?;
        writeln!(f)?;
        write!(f, "{INDENT}")?;
        self.chain.write_indented(f, INDENT)?;
        writeln!(f)?;
        writeln!(f)?;
        writeln!(f, "{INDENT}// Apply color parameter based on alpha")?;
        writeln!(f, "{INDENT}if (alpha > 0.0) {{")?;
        writeln!(f, "{INDENT}{INDENT}color = polygonColor;")?;
        writeln!(f, "{INDENT}{INDENT}color.a = alpha * globalAlpha;")?;
        writeln!(f, "{INDENT}}}")?;
        writeln!(f, "{INDENT}gl_FragColor = color;")?;
        writeln!(f, "}}")
    }
}
