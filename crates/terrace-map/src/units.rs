macro_rules! def_units {
    ($t: ident, $unit: literal) => {
        #[doc = concat!("Denotes that the inner `T` is given in units of ", $unit, ".")]
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        pub struct $t<T>(pub T);
    };
}

def_units!(TileUnits, "tiles");
def_units!(ChunkUnits, "chunks");
