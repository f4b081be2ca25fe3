/// Column-major 4x4 matrix, the layout shared with GPU uniform buffers and
/// the matrices map libraries hand to custom layers.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat4 {
    pub m: [f64; 16],
}

impl Mat4 {
    pub fn identity() -> Self {
        let mut m = [0.0; 16];
        m[0] = 1.0;
        m[5] = 1.0;
        m[10] = 1.0;
        m[15] = 1.0;
        Self { m }
    }

    pub fn from_array(m: [f64; 16]) -> Self {
        Self { m }
    }

    pub fn as_array(self) -> [f64; 16] {
        self.m
    }

    pub fn translation(x: f64, y: f64, z: f64) -> Self {
        let mut out = Self::identity();
        out.m[12] = x;
        out.m[13] = y;
        out.m[14] = z;
        out
    }

    /// Rotation about the X axis by `rad` (right-handed).
    pub fn rotation_x(rad: f64) -> Self {
        let (s, c) = rad.sin_cos();
        let mut out = Self::identity();
        out.m[5] = c;
        out.m[6] = s;
        out.m[9] = -s;
        out.m[10] = c;
        out
    }

    /// Right-handed perspective projection looking down -Z, NDC depth in
    /// [-1, 1].
    pub fn perspective(fov_y_rad: f64, aspect: f64, near: f64, far: f64) -> Self {
        let f = 1.0 / (0.5 * fov_y_rad).tan();
        let mut m = [0.0; 16];
        m[0] = f / aspect;
        m[5] = f;
        m[10] = (far + near) / (near - far);
        m[11] = -1.0;
        m[14] = 2.0 * far * near / (near - far);
        Self { m }
    }

    /// Applies the matrix to a point and performs the homogeneous divide.
    pub fn transform_point(self, p: [f64; 3]) -> [f64; 3] {
        let m = self.m;
        let x = m[0] * p[0] + m[4] * p[1] + m[8] * p[2] + m[12];
        let y = m[1] * p[0] + m[5] * p[1] + m[9] * p[2] + m[13];
        let z = m[2] * p[0] + m[6] * p[1] + m[10] * p[2] + m[14];
        let w = m[3] * p[0] + m[7] * p[1] + m[11] * p[2] + m[15];
        if w == 0.0 {
            [x, y, z]
        } else {
            [x / w, y / w, z / w]
        }
    }
}

impl std::ops::Mul for Mat4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let mut m = [0.0; 16];
        for col in 0..4 {
            for row in 0..4 {
                let mut acc = 0.0;
                for k in 0..4 {
                    acc += self.m[k * 4 + row] * rhs.m[col * 4 + k];
                }
                m[col * 4 + row] = acc;
            }
        }
        Self { m }
    }
}
