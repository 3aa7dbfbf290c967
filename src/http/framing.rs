//! Frame splitting for the line-delimited transport.
//!
//! The transport reserves `\n` as its message delimiter, so a response can
//! never be sent as one blob: every physical line must go out as its own
//! frame, and the transport reinserts the delimiter on send. The blank line
//! separating headers from body is semantically load-bearing and must
//! survive as its own (empty) frame.

/// Delimiter the transport reserves; frames never contain it.
pub const FRAME_DELIMITER: char = '\n';

/// Split an assembled response into ordered transport frames.
///
/// Every segment is preserved, including empty ones. Invariant: rejoining
/// the frames with [`FRAME_DELIMITER`] reproduces the input exactly.
pub fn split_frames(response: &str) -> impl Iterator<Item = &str> {
    response.split(FRAME_DELIMITER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_blank_lines_as_empty_frames() {
        let response = "HTTP/1.1 200 OK\nContent-Length: 2\n\nhi";
        let frames: Vec<&str> = split_frames(response).collect();
        assert_eq!(frames, vec!["HTTP/1.1 200 OK", "Content-Length: 2", "", "hi"]);
    }

    #[test]
    fn rejoining_frames_reproduces_response() {
        let response = "a\n\nb\n\n\nc\n";
        let frames: Vec<&str> = split_frames(response).collect();
        assert_eq!(frames.join("\n"), response);
    }

    #[test]
    fn body_with_trailing_newline_yields_trailing_empty_frame() {
        let frames: Vec<&str> = split_frames("x\n").collect();
        assert_eq!(frames, vec!["x", ""]);
    }

    #[test]
    fn empty_input_is_one_empty_frame() {
        let frames: Vec<&str> = split_frames("").collect();
        assert_eq!(frames, vec![""]);
    }
}
