//! Schema descriptors
//!
//! A [`Schema`] declares how a [`Value`](crate::Value) must be interpreted.
//! Scalars are leaves; `List` and `Set` own a boxed element schema, so a
//! schema is a finite tree. Nesting is expected to be shallow (one level in
//! practice) and no depth guard is applied.
//!
//! ## The Six Types
//!
//! | Tag | Payload | Orderable |
//! |-----|---------|-----------|
//! | String | UTF-8 text | yes |
//! | Bool | true / false | yes |
//! | Int | 64-bit signed integer | yes |
//! | Float | 64-bit IEEE-754 | yes |
//! | List | ordered elements | no |
//! | Set | unordered elements | no |

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type tag of a schema node
///
/// This enum MUST have exactly 6 variants, one per schema shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeTag {
    /// UTF-8 string
    String,
    /// Boolean
    Bool,
    /// 64-bit signed integer
    Int,
    /// 64-bit float
    Float,
    /// Ordered collection
    List,
    /// Unordered collection
    Set,
}

impl TypeTag {
    /// All type tags (for iteration)
    pub const ALL: [TypeTag; 6] = [
        TypeTag::String,
        TypeTag::Bool,
        TypeTag::Int,
        TypeTag::Float,
        TypeTag::List,
        TypeTag::Set,
    ];

    /// Human-readable display name
    pub const fn name(&self) -> &'static str {
        match self {
            TypeTag::String => "String",
            TypeTag::Bool => "Bool",
            TypeTag::Int => "Int",
            TypeTag::Float => "Float",
            TypeTag::List => "List",
            TypeTag::Set => "Set",
        }
    }

    /// Short identifier (for configuration files)
    pub const fn id(&self) -> &'static str {
        match self {
            TypeTag::String => "string",
            TypeTag::Bool => "bool",
            TypeTag::Int => "int",
            TypeTag::Float => "float",
            TypeTag::List => "list",
            TypeTag::Set => "set",
        }
    }

    /// Parse from short identifier
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "string" => Some(TypeTag::String),
            "bool" => Some(TypeTag::Bool),
            "int" => Some(TypeTag::Int),
            "float" => Some(TypeTag::Float),
            "list" => Some(TypeTag::List),
            "set" => Some(TypeTag::Set),
            _ => None,
        }
    }

    /// Collections carry an element schema
    pub const fn is_collection(&self) -> bool {
        matches!(self, TypeTag::List | TypeTag::Set)
    }

    /// Only scalars have a defined sort order
    pub const fn is_orderable(&self) -> bool {
        !self.is_collection()
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Schema node: a type tag plus, for collections, the element schema
///
/// Serialized with snake_case names, so configuration reads as
/// `"int"` or `{ list = "string" }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Schema {
    /// UTF-8 string
    String,
    /// Boolean
    Bool,
    /// 64-bit signed integer
    Int,
    /// 64-bit float
    Float,
    /// Ordered collection of elements sharing one schema
    List(Box<Schema>),
    /// Unordered collection of elements sharing one schema
    Set(Box<Schema>),
}

impl Schema {
    /// List of `element`
    pub fn list(element: Schema) -> Self {
        Schema::List(Box::new(element))
    }

    /// Set of `element`
    pub fn set(element: Schema) -> Self {
        Schema::Set(Box::new(element))
    }

    /// The tag of this node
    pub const fn type_tag(&self) -> TypeTag {
        match self {
            Schema::String => TypeTag::String,
            Schema::Bool => TypeTag::Bool,
            Schema::Int => TypeTag::Int,
            Schema::Float => TypeTag::Float,
            Schema::List(_) => TypeTag::List,
            Schema::Set(_) => TypeTag::Set,
        }
    }

    /// Element schema of a collection, `None` for scalars
    pub fn element(&self) -> Option<&Schema> {
        match self {
            Schema::List(element) | Schema::Set(element) => Some(element),
            _ => None,
        }
    }

    /// Innermost scalar schema
    ///
    /// Filter values for a collection are expressed in terms of this schema,
    /// since the matcher recurses until it reaches a scalar.
    pub fn scalar(&self) -> &Schema {
        let mut node = self;
        while let Some(element) = node.element() {
            node = element;
        }
        node
    }

    /// Number of collection levels above the scalar (0 for scalars)
    pub fn depth(&self) -> usize {
        self.element().map_or(0, |element| 1 + element.depth())
    }

    /// Whether values of this schema can be ordered
    pub const fn is_orderable(&self) -> bool {
        self.type_tag().is_orderable()
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Schema::List(element) => write!(f, "List<{}>", element),
            Schema::Set(element) => write!(f, "Set<{}>", element),
            scalar => f.write_str(scalar.type_tag().name()),
        }
    }
}
