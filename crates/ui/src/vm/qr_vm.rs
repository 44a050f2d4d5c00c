use qrcode::{Color, QrCode};
use syntax_core::pattern::{GRID_SIZE, PatternGrid};

/// A square module grid for the share card, rendered as rows of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrGridVm {
    pub size: usize,
    pub rows: Vec<Vec<bool>>,
    /// False when this is the decorative fallback texture rather than a
    /// real encoding.
    pub scannable: bool,
}

/// Encodes the share URL as a real QR code, falling back to the decorative
/// deterministic pattern if encoding fails (e.g. the URL is too long for
/// the symbol sizes the encoder supports).
#[must_use]
pub fn map_share_qr(url: &str) -> QrGridVm {
    match QrCode::new(url.as_bytes()) {
        Ok(code) => {
            let size = code.width();
            let colors = code.to_colors();
            let rows = (0..size)
                .map(|y| {
                    (0..size)
                        .map(|x| colors[y * size + x] == Color::Dark)
                        .collect()
                })
                .collect();
            QrGridVm {
                size,
                rows,
                scannable: true,
            }
        }
        Err(err) => {
            log::warn!("share url did not encode as a qr code: {err}");
            map_decorative(url)
        }
    }
}

/// The decorative look-alike grid; stable per input, never scannable.
#[must_use]
pub fn map_decorative(input: &str) -> QrGridVm {
    let grid = PatternGrid::generate(input);
    QrGridVm {
        size: GRID_SIZE,
        rows: grid.rows().map(|row| row.to_vec()).collect(),
        scannable: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_url_encodes_as_a_real_grid() {
        let vm = map_share_qr("https://example.com/syntax-lab");
        assert!(vm.scannable);
        assert_eq!(vm.rows.len(), vm.size);
        assert!(vm.rows.iter().all(|row| row.len() == vm.size));
        // A real code always has its dark finder corner module.
        assert!(vm.rows[0][0]);
    }

    #[test]
    fn decorative_grid_is_deterministic() {
        let first = map_decorative("abc");
        let second = map_decorative("abc");
        assert_eq!(first, second);
        assert!(!first.scannable);
        assert_eq!(first.size, GRID_SIZE);
    }
}
