//! Variable bindings: the (OID, value) pairs carried in every PDU.

use crate::ber::Value;
use crate::error::{Error, Result};
use crate::oid::ObjectIdentifier;

/// One `name`/`value` pair. Encodes as a two-element `Sequence`.
#[derive(Debug, Clone, PartialEq)]
pub struct VarBind {
    pub name: ObjectIdentifier,
    pub value: Value,
}

impl VarBind {
    pub fn new(name: ObjectIdentifier, value: Value) -> Self {
        VarBind { name, value }
    }

    pub fn to_value(&self) -> Value {
        Value::Sequence(vec![Value::ObjectIdentifier(self.name.clone()), self.value.clone()])
    }

    pub fn from_value(value: &Value) -> Result<Self> {
        if value.tag() != crate::ber::Tag::SEQUENCE {
            return Err(Error::grammar_violation("VarBind must be a Sequence"));
        }
        let children = value
            .children()
            .ok_or_else(|| Error::grammar_violation("VarBind must be a Sequence"))?;
        let [name, val] = children else {
            return Err(Error::grammar_violation(format!(
                "VarBind must have exactly 2 elements, found {}",
                children.len()
            )));
        };
        let name = name
            .as_oid()
            .ok_or_else(|| Error::grammar_violation("VarBind name must be an OBJECT IDENTIFIER"))?
            .clone();
        Ok(VarBind { name, value: val.clone() })
    }
}

/// An ordered, duplicate-permitting list of variable bindings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VarBindList(pub Vec<VarBind>);

impl VarBindList {
    pub fn new() -> Self {
        VarBindList(Vec::new())
    }

    pub fn push(&mut self, vb: VarBind) {
        self.0.push(vb);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VarBind> {
        self.0.iter()
    }

    pub fn to_value(&self) -> Value {
        Value::Sequence(self.0.iter().map(VarBind::to_value).collect())
    }

    pub fn from_value(value: &Value) -> Result<Self> {
        if value.tag() != crate::ber::Tag::SEQUENCE {
            return Err(Error::grammar_violation("VarBindList must be a Sequence"));
        }
        let children = value
            .children()
            .ok_or_else(|| Error::grammar_violation("VarBindList must be a Sequence"))?;
        let varbinds = children
            .iter()
            .map(VarBind::from_value)
            .collect::<Result<Vec<_>>>()?;
        Ok(VarBindList(varbinds))
    }
}

impl<'a> IntoIterator for &'a VarBindList {
    type Item = &'a VarBind;
    type IntoIter = std::slice::Iter<'a, VarBind>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
