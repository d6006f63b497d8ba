//! Chromosome description grammar.
//!
//! A description is a string of sequence symbols interleaved with boundary
//! markers:
//!
//! | marker | meaning |
//! |---|---|
//! | `<` `>` | non-breakable block |
//! | `(` `)` | gene |
//! | `{` `}` | coexpression block, non-breakable only in coexpression mode |
//! | `;` | essential gene, directly before the gene's `)` |
//!
//! Whitespace is ignored.

use crate::errors::DescriptionError;
use crate::genome::{Region, RegionFactory};

pub const LEFT_NOBREAK_BOUNDARY: char = '<';
pub const RIGHT_NOBREAK_BOUNDARY: char = '>';
pub const LEFT_GENE_BOUNDARY: char = '(';
pub const RIGHT_GENE_BOUNDARY: char = ')';
pub const LEFT_COEXPRESSION_BOUNDARY: char = '{';
pub const RIGHT_COEXPRESSION_BOUNDARY: char = '}';
pub const ESSENTIAL_GENE_MARKER: char = ';';

/// Left-to-right scanner state.
struct Parser<'f> {
    factory: &'f mut RegionFactory,
    use_coexpression: bool,
    regions: Vec<Region>,
    buffer: Vec<u8>,
    /// Positions of the currently open boundaries.
    gene: Option<usize>,
    nobreak: Option<usize>,
    coexpression: Option<usize>,
    essential: bool,
}

impl<'f> Parser<'f> {
    fn can_break(&self) -> bool {
        self.nobreak.is_none() && !(self.use_coexpression && self.coexpression.is_some())
    }

    /// Emit the buffer as an intergenic region; empty buffers are dropped.
    fn flush_intergenic(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let region = if self.can_break() {
            self.factory.intergenic(&self.buffer)
        } else {
            self.factory.non_breakable(&self.buffer)
        };
        self.regions.push(region);
        self.buffer.clear();
    }

    fn unexpected(marker: char, position: usize) -> DescriptionError {
        DescriptionError::UnexpectedMarker { marker, position }
    }

    fn outside_gene(&self, marker: char, position: usize) -> Result<(), DescriptionError> {
        match self.gene {
            Some(_) => Err(Self::unexpected(marker, position)),
            None => Ok(()),
        }
    }

    fn finish(mut self) -> Result<Vec<Region>, DescriptionError> {
        let open = [
            (LEFT_GENE_BOUNDARY, self.gene),
            (LEFT_NOBREAK_BOUNDARY, self.nobreak),
            (LEFT_COEXPRESSION_BOUNDARY, self.coexpression),
        ];
        if let Some((marker, Some(position))) = open.into_iter().find(|(_, pos)| pos.is_some()) {
            return Err(DescriptionError::Unclosed { marker, position });
        }
        self.flush_intergenic();
        Ok(self.regions)
    }
}

/// Parse a description into its ordered regions.
///
/// Gene ordinals and region handles are drawn from `factory` in the order the
/// regions appear.
pub fn parse_regions(
    description: &str,
    use_coexpression: bool,
    factory: &mut RegionFactory,
) -> Result<Vec<Region>, DescriptionError> {
    let mut parser = Parser {
        factory,
        use_coexpression,
        regions: Vec::new(),
        buffer: Vec::new(),
        gene: None,
        nobreak: None,
        coexpression: None,
        essential: false,
    };

    let mut chars = description.chars().enumerate().peekable();
    while let Some((position, c)) = chars.next() {
        match c {
            LEFT_GENE_BOUNDARY => {
                parser.outside_gene(c, position)?;
                parser.flush_intergenic();
                parser.gene = Some(position);
            }
            RIGHT_GENE_BOUNDARY => {
                if parser.gene.is_none() {
                    return Err(Parser::unexpected(c, position));
                }
                let gene = parser.factory.gene(&parser.buffer, parser.essential);
                parser.regions.push(gene);
                parser.buffer.clear();
                parser.gene = None;
                parser.essential = false;
            }
            LEFT_NOBREAK_BOUNDARY => {
                parser.outside_gene(c, position)?;
                if parser.nobreak.is_some() {
                    return Err(Parser::unexpected(c, position));
                }
                parser.flush_intergenic();
                parser.nobreak = Some(position);
            }
            RIGHT_NOBREAK_BOUNDARY => {
                parser.outside_gene(c, position)?;
                if parser.nobreak.is_none() {
                    return Err(Parser::unexpected(c, position));
                }
                parser.flush_intergenic();
                parser.nobreak = None;
            }
            LEFT_COEXPRESSION_BOUNDARY => {
                parser.outside_gene(c, position)?;
                if parser.coexpression.is_some() {
                    return Err(Parser::unexpected(c, position));
                }
                parser.flush_intergenic();
                parser.coexpression = Some(position);
            }
            RIGHT_COEXPRESSION_BOUNDARY => {
                parser.outside_gene(c, position)?;
                if parser.coexpression.is_none() {
                    return Err(Parser::unexpected(c, position));
                }
                parser.flush_intergenic();
                parser.coexpression = None;
            }
            ESSENTIAL_GENE_MARKER => {
                let closes_gene = matches!(chars.peek(), Some((_, RIGHT_GENE_BOUNDARY)));
                if parser.gene.is_none() || !closes_gene {
                    return Err(DescriptionError::MisplacedEssentialMarker { position });
                }
                parser.essential = true;
            }
            c if c.is_whitespace() => {}
            c if c.is_ascii_graphic() => parser.buffer.push(c as u8),
            symbol => return Err(DescriptionError::InvalidSymbol { symbol, position }),
        }
    }

    parser.finish()
}
