use log::debug;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::Path;

use crate::runtime::Error;

/// Shortest input niffler can sniff a compression format from.
const MIN_SNIFF_LEN: u64 = 5;

/// One FASTQ record as the four raw lines read from disk, line endings included.
///
/// The lines are taken by position only. Nothing checks that the header
/// starts with '@' or that the third line is a '+' separator, so a
/// misaligned file is read as if it were well formed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RawFastqRecord {
    pub head: Vec<u8>,
    pub seq: Vec<u8>,
    pub plus: Vec<u8>,
    pub qual: Vec<u8>,
}

impl RawFastqRecord {
    /// Read name used for matching: the header with its first character
    /// dropped, up to the first whitespace.
    pub fn read_id(&self) -> &[u8] {
        let rest = self.head.get(1..).unwrap_or(&[]);
        rest.split(|b| b.is_ascii_whitespace())
            .find(|token| !token.is_empty())
            .unwrap_or(&[])
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.head)?;
        writer.write_all(&self.seq)?;
        writer.write_all(&self.plus)?;
        writer.write_all(&self.qual)?;
        Ok(())
    }
}

/// Reads a FASTQ stream four lines at a time.
pub struct FastqChunkReader<R> {
    reader: R,
}

impl<R: BufRead> FastqChunkReader<R> {
    pub fn new(reader: R) -> Self {
        FastqChunkReader { reader }
    }

    /// Next record, or None at end of stream. A trailing record with fewer
    /// than four lines is dropped.
    pub fn next_record(&mut self) -> io::Result<Option<RawFastqRecord>> {
        let mut record = RawFastqRecord::default();
        for line in [
            &mut record.head,
            &mut record.seq,
            &mut record.plus,
            &mut record.qual,
        ] {
            if self.reader.read_until(b'\n', line)? == 0 {
                return Ok(None);
            }
        }
        Ok(Some(record))
    }
}

impl<R: BufRead> Iterator for FastqChunkReader<R> {
    type Item = io::Result<RawFastqRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}

/// Open a FASTQ file, transparently decompressing it if needed.
pub fn open_fastq(path: &Path) -> Result<FastqChunkReader<Box<dyn BufRead>>, Error> {
    let file = File::open(path).map_err(|e| Error::file_access(path, e))?;
    let len = file
        .metadata()
        .map_err(|e| Error::file_access(path, e))?
        .len();

    //Too short to carry a compression header; read as is
    if len < MIN_SNIFF_LEN {
        debug!("Opened file {} uncompressed", path.display());
        let reader: Box<dyn BufRead> = Box::new(BufReader::new(file));
        return Ok(FastqChunkReader::new(reader));
    }

    let (reader, compression): (Box<dyn Read>, _) =
        niffler::get_reader(Box::new(file)).map_err(|e| {
            Error::file_access(
                path,
                io::Error::new(io::ErrorKind::InvalidData, e.to_string()),
            )
        })?;

    debug!(
        "Opened file {} with compression {:?}",
        path.display(),
        compression
    );
    let reader: Box<dyn BufRead> = Box::new(BufReader::new(reader));
    Ok(FastqChunkReader::new(reader))
}
