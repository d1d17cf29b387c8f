/// XOR of every byte between `$` and `*`.
///
/// ```text
///   $GPGGA,...,0031*4F
///    └─── body ────┘
/// ```
#[must_use]
pub fn compute(body: &[u8]) -> u8 {
    body.iter().fold(0, |acc, b| acc ^ b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_sentence_checksum() {
        let body = b"GPRMC,225446,A,4916.45,N,12311.12,W,000.5,054.7,191194,020.3,E";
        assert_eq!(compute(body), 0x68);
    }

    #[test]
    fn gga_reference_checksum() {
        let body = b"GPGGA,172814.0,3723.46587704,N,12202.26957864,W,2,6,1.2,18.893,M,-25.669,M,2.0,0031";
        assert_eq!(compute(body), 0x4F);
    }
}
