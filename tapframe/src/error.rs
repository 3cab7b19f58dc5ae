quick_error! {
    /// Errors reported while decoding a captured frame.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Error {
        /// The input ended before a header, tag or length-framed payload
        /// could be read in full.
        TruncatedFrame {
            display("frame truncated before all headers could be read")
        }
    }
}
