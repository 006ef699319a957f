use alloy_sol_types::sol;

sol! {
    /// A message sent from L2 to L1, recorded by the L2 message passer and
    /// executed once by the portal after the finalization period.
    #[derive(Debug, PartialEq, Eq)]
    struct WithdrawalTransaction {
        uint256 nonce;
        address sender;
        address target;
        uint256 value;
        uint256 gasLimit;
        bytes data;
    }

    /// The preimage of an output root. Hashing the four fields in order
    /// reproduces the root committed by the output oracle.
    #[derive(Debug, PartialEq, Eq, Default)]
    struct OutputRootProof {
        bytes32 version;
        bytes32 stateRoot;
        bytes32 withdrawerStorageRoot;
        bytes32 latestBlockhash;
    }
}
