use crate::query::ast::schema::Sequence;

#[derive(Debug, Clone)]
pub struct CreateSequence {
    pub sequence: Sequence,
}

#[derive(Debug, Clone)]
pub struct DropSequence {
    pub sequence: Sequence,
}
