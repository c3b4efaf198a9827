//! Reassembly of kagome's concatenated JSON output.
//!
//! `kagome -json` writes one JSON array per input line, but the arrays are
//! concatenated with no separator and a single array may be pretty-printed
//! across several output lines. Splitting on line boundaries therefore does
//! not work; instead the stream is cut wherever the running bracket balance
//! returns to zero, which marks the end of one array.
//!
//! Document order is assumed to match input line order. That is kagome's
//! observed behavior, not a verified contract; the positional correlation
//! downstream depends on it.

/// Split concatenated analyzer output into one raw document string per
/// input word, in stream order.
///
/// Scans line by line, accumulating lines while tracking the bracket
/// balance (`[` opens, `]` closes). Each time the balance returns to zero
/// the buffered lines form exactly one complete array serialization.
///
/// A trailing buffer whose brackets never rebalance (truncated output) is
/// discarded; the entries it would have covered take the unparsed-fallback
/// path instead.
pub fn split_documents(output: &str) -> Vec<String> {
    let mut documents = Vec::new();
    let mut buffer: Vec<&str> = Vec::new();
    let mut balance: i64 = 0;

    for line in output.lines() {
        buffer.push(line);
        balance += line.matches('[').count() as i64;
        balance -= line.matches(']').count() as i64;

        if balance == 0 && !buffer.is_empty() {
            documents.push(buffer.join("\n"));
            buffer.clear();
        }
    }

    documents
}
