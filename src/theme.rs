//! Default palette for the editor highlighter and error headers: the subset
//! of Catppuccin Mocha that [`crate::config::Colors`] falls back to.

pub mod catppuccin {
    use nu_ansi_term::Color;

    pub struct Mocha;

    impl Mocha {
        // tape movement
        pub const SKY: Color = Color::Rgb(137, 220, 235);
        pub const TEAL: Color = Color::Rgb(148, 226, 213);

        // cell arithmetic
        pub const GREEN: Color = Color::Rgb(166, 227, 161);
        pub const RED: Color = Color::Rgb(243, 139, 168);

        // i/o and loops
        pub const YELLOW: Color = Color::Rgb(249, 226, 175);
        pub const PEACH: Color = Color::Rgb(250, 179, 135);
        pub const MAUVE: Color = Color::Rgb(203, 166, 247);

        /// Comments.
        pub const SURFACE2: Color = Color::Rgb(108, 112, 134);
        /// Error headers.
        pub const MAROON: Color = Color::Rgb(235, 160, 172);
    }
}
