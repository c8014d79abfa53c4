//! A color as a record of byte channels.

swatch_macros::gen_record! {
    /// A color with red, green, blue and alpha channels in [0, 255].
    pub struct RgbaRecord {
        /// The red channel.
        r: u8,
        /// The green channel.
        g: u8,
        /// The blue channel.
        b: u8,
        /// The alpha channel, where 255 is fully opaque.
        a: u8,
    }
}

#[cfg(test)]
mod tests {
    use crate::{Color, Input, RgbaRecord};

    #[test]
    fn record_decodes_to_the_same_color() {
        let record = RgbaRecord::new(210, 105, 30, 255);
        let color = Color::new(record).unwrap();
        assert_eq!(color.as_rgba_record(), record);
        assert_eq!(color.as_hex(), "#d2691e");
    }

    #[test]
    fn record_input_uses_field_names_as_keys() {
        let Input::Record(record) = Input::from(RgbaRecord::new(1, 2, 3, 4)) else {
            panic!("expected a record");
        };
        assert_eq!(record.len(), 4);
    }
}
