//! Serde helpers for types that don't natively support serde.

pub mod mat4_serde {
    use lin_alg::f32::Mat4;
    use serde::{self, Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(mat: &Mat4, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        mat.data.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Mat4, D::Error>
    where
        D: Deserializer<'de>,
    {
        let data: [f32; 16] = Deserialize::deserialize(deserializer)?;
        Ok(Mat4 { data })
    }
}
